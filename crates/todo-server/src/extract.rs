//! JSON body extraction that keeps rejections inside the API error contract.
//!
//! axum's own `Json` rejection replies with a plain-text body echoing the
//! serde parse error. [`JsonBody`] routes those rejections through
//! [`ApiError`] instead, so a missing, mistyped, or malformed body gets the
//! same `{ "error": ... }` shape and logging as every other client error.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::ApiError;

/// `axum::Json` with rejections translated to [`ApiError`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}
