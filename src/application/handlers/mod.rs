//! Command and query handlers, one per exposed operation.

pub mod session;
pub mod tally;
pub mod vote;
