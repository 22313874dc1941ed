//! Voting-session module - lifecycle state machine for time-boxed rounds.

mod aggregate;
mod errors;

pub use aggregate::{VotingSession, DEFAULT_DURATION_MINUTES};
pub use errors::SessionError;
