//! HTTP DTOs for voting-session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::VotingSession;
use crate::domain::tally::{Outcome, Tally};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a voting session for an agenda.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub agenda_id: String,
    /// Minutes the round stays open once started; defaults to 1.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Voting session view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub agenda_id: String,
    pub status: SessionStatus,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub created_at: String,
}

impl From<&VotingSession> for SessionResponse {
    fn from(session: &VotingSession) -> Self {
        Self {
            id: session.id().to_string(),
            agenda_id: session.agenda_id().to_string(),
            status: session.status(),
            duration_minutes: session.duration_minutes(),
            start_time: session.start_time().map(|t| t.as_datetime().to_rfc3339()),
            deadline: session.deadline().map(|t| t.as_datetime().to_rfc3339()),
            created_at: session.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Result of a voting session.
#[derive(Debug, Clone, Serialize)]
pub struct TallyResponse {
    pub session_id: String,
    pub yes: u64,
    pub no: u64,
    pub total: u64,
    pub outcome: Outcome,
}

impl TallyResponse {
    pub fn from_tally(session_id: &str, tally: &Tally) -> Self {
        Self {
            session_id: session_id.to_string(),
            yes: tally.yes,
            no: tally.no,
            total: tally.total,
            outcome: tally.outcome,
        }
    }
}
