//! Vote-admission error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, VoterId};

/// Errors produced while admitting a vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// Session was not found.
    SessionNotFound(SessionId),
    /// Voter is unknown or not eligible to vote.
    VoterNotFound(VoterId),
    /// Session is not accepting votes in its current status.
    SessionNotActive(String),
    /// The session's deadline has passed.
    SessionExpired(SessionId),
    /// This voter already cast a vote in this session.
    AlreadyVoted { session_id: SessionId, voter_id: VoterId },
    /// Durable-store failure, surfaced as-is without retry.
    Infrastructure(String),
}

impl VoteError {
    pub fn session_not_found(id: SessionId) -> Self {
        VoteError::SessionNotFound(id)
    }

    pub fn voter_not_found(id: VoterId) -> Self {
        VoteError::VoterNotFound(id)
    }

    pub fn session_not_active(message: impl Into<String>) -> Self {
        VoteError::SessionNotActive(message.into())
    }

    pub fn session_expired(id: SessionId) -> Self {
        VoteError::SessionExpired(id)
    }

    pub fn already_voted(session_id: SessionId, voter_id: VoterId) -> Self {
        VoteError::AlreadyVoted {
            session_id,
            voter_id,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        VoteError::Infrastructure(message.into())
    }

    /// Stable outcome code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            VoteError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            VoteError::VoterNotFound(_) => ErrorCode::VoterNotFound,
            VoteError::SessionNotActive(_) => ErrorCode::InvalidStateTransition,
            VoteError::SessionExpired(_) => ErrorCode::SessionExpired,
            VoteError::AlreadyVoted { .. } => ErrorCode::AlreadyVoted,
            VoteError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Caller-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            VoteError::SessionNotFound(id) => format!("Voting session not found: {}", id),
            VoteError::VoterNotFound(id) => format!("Voter not found or not eligible: {}", id),
            VoteError::SessionNotActive(msg) => format!("Session not active: {}", msg),
            VoteError::SessionExpired(id) => format!("Voting session expired: {}", id),
            VoteError::AlreadyVoted {
                session_id,
                voter_id,
            } => format!("Voter {} already voted in session {}", voter_id, session_id),
            VoteError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for VoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for VoteError {}

impl From<DomainError> for VoteError {
    fn from(err: DomainError) -> Self {
        VoteError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn expired_and_not_active_have_distinct_codes() {
        let session_id = SessionId::new();
        assert_eq!(
            VoteError::session_expired(session_id).code(),
            ErrorCode::SessionExpired
        );
        assert_eq!(
            VoteError::session_not_active("session is pending").code(),
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn already_voted_message_names_both_parties() {
        let session_id = SessionId::new();
        let voter_id = VoterId::from_uuid(Uuid::new_v4());
        let msg = VoteError::already_voted(session_id, voter_id).message();
        assert!(msg.contains(&session_id.to_string()));
        assert!(msg.contains(&voter_id.to_string()));
    }
}
