//! Clock adapters.

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually-driven clock for tests.
///
/// Time only moves when `set` or `advance_*` is called, which lets tests
/// place a session's deadline in the past and trigger a sweep tick
/// deterministically.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<Timestamp>,
}

impl ManualClock {
    /// Creates a clock frozen at the given instant.
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to an absolute instant.
    pub fn set(&self, now: Timestamp) {
        *self.now.write().unwrap() = now;
    }

    /// Advances the clock by whole minutes.
    pub fn advance_minutes(&self, minutes: u32) {
        let mut now = self.now.write().unwrap();
        *now = now.plus_minutes(minutes);
    }

    /// Advances the clock by seconds.
    pub fn advance_secs(&self, secs: u64) {
        let mut now = self.now.write().unwrap();
        *now = now.plus_secs(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.read().unwrap()
    }
}
