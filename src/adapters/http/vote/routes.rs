//! HTTP routes for vote endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{cast_vote, has_voted, VoteHandlers};

/// Creates the vote router with all endpoints.
pub fn vote_routes(handlers: VoteHandlers) -> Router {
    Router::new()
        .route("/", post(cast_vote))
        .route("/status", get(has_voted))
        .with_state(handlers)
}
