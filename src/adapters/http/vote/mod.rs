//! HTTP adapter for vote endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CastVoteRequest, HasVotedResponse, VoteResponse};
pub use handlers::VoteHandlers;
pub use routes::vote_routes;
