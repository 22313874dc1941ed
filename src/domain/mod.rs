//! Domain layer - aggregates, value objects, and business rules.

pub mod foundation;
pub mod session;
pub mod tally;
pub mod vote;
