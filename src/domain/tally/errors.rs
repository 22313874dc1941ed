//! Tally error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Errors produced while aggregating a session's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// Session was not found.
    SessionNotFound(SessionId),
    /// Session has not been started; no result is meaningful yet.
    NotStarted(SessionId),
    /// Durable-store failure.
    Infrastructure(String),
}

impl TallyError {
    pub fn session_not_found(id: SessionId) -> Self {
        TallyError::SessionNotFound(id)
    }

    pub fn not_started(id: SessionId) -> Self {
        TallyError::NotStarted(id)
    }

    /// Stable outcome code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TallyError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            TallyError::NotStarted(_) => ErrorCode::InvalidStateTransition,
            TallyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Caller-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            TallyError::SessionNotFound(id) => format!("Voting session not found: {}", id),
            TallyError::NotStarted(id) => {
                format!("Session {} has not yet started; no result available", id)
            }
            TallyError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for TallyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TallyError {}

impl From<DomainError> for TallyError {
    fn from(err: DomainError) -> Self {
        TallyError::Infrastructure(err.to_string())
    }
}
