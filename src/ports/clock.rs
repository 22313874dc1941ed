//! Clock port - source of the current time.
//!
//! Injected so that deadline arithmetic and the expiration sweep can be
//! driven deterministically in tests.

use crate::domain::foundation::Timestamp;

/// Supplies the current time.
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> Timestamp;
}
