//! Expiration sweep configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the background expiration sweep.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Seconds between sweep ticks
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Maximum sessions closed per tick
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

impl SweepConfig {
    /// Get the sweep interval as Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Validate sweep configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_secs == 0 || self.interval_secs > 3600 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        if self.batch_size == 0 || self.batch_size > 10_000 {
            return Err(ValidationError::InvalidSweepBatchSize);
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_interval() -> u64 {
    60
}

fn default_batch_size() -> u32 {
    100
}
