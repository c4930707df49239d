//! Binary entrypoint for the todo HTTP server.
//!
//! Reads configuration from environment variables:
//! - `TODO_DB_PATH`: SQLite database file path (default: "todo.db")
//! - `TODO_PORT`: Server listen port (default: "3000")

use todo_server::router::build_router;
use todo_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("TODO_DB_PATH").unwrap_or_else(|_| "todo.db".to_string());
    let port = std::env::var("TODO_PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(&db_path).expect("Failed to initialize application state");
    tracing::info!("opened task store at {}", db_path);

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("todo server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
