//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

mod error;
pub mod session;
pub mod vote;

pub use error::ErrorResponse;
pub use session::{session_routes, SessionHandlers};
pub use vote::{vote_routes, VoteHandlers};
