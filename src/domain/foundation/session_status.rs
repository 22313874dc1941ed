//! SessionStatus enum for tracking the lifecycle of voting sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a voting session.
///
/// Transitions are monotonic: Pending -> Active -> Closed. A Pending session
/// may also be closed administratively without ever activating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Pending,
    Active,
    Closed,
}

impl SessionStatus {
    /// Returns true if the session has not reached its terminal state.
    pub fn is_open(&self) -> bool {
        !matches!(self, SessionStatus::Closed)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Pending -> Active
    /// - Pending -> Closed (administrative close, never expiration)
    /// - Active -> Closed
    pub fn can_transition_to(&self, target: &SessionStatus) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Closed) | (Active, Closed)
        )
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Pending => "Pending",
            SessionStatus::Active => "Active",
            SessionStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "Pending" => Ok(SessionStatus::Pending),
            "active" | "Active" => Ok(SessionStatus::Active),
            "closed" | "Closed" => Ok(SessionStatus::Closed),
            other => Err(format!("unknown session status: {}", other)),
        }
    }
}
