//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `clock` - system and manually-driven clocks
//! - `memory` - in-memory stores for tests and development
//! - `postgres` - PostgreSQL-backed stores
//! - `identity` - external identity-verification client
//! - `http` - axum REST API

pub mod clock;
pub mod http;
pub mod identity;
pub mod memory;
pub mod postgres;

pub use clock::{ManualClock, SystemClock};
