//! Application layer - command/query handlers and background services.

pub mod handlers;
pub mod sweeper;

pub use sweeper::{ExpirationSweeper, SweeperConfig};
