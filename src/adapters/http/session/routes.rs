//! HTTP routes for voting-session endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    close_session, create_session, get_result, get_session, start_session, SessionHandlers,
};

/// Creates the voting-session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session))
        .route("/:id/start", patch(start_session))
        .route("/:id/close", patch(close_session))
        .route("/:id/result", get(get_result))
        .with_state(handlers)
}
