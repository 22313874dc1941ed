//! Session-specific error types.

use crate::domain::foundation::{AgendaId, DomainError, ErrorCode, SessionId};

/// Session lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Referenced agenda does not exist or is inactive.
    AgendaNotFound(AgendaId),
    /// A pending or active session already exists for the agenda.
    Conflict(AgendaId),
    /// Operation is not legal for the session's current status.
    InvalidState(String),
    /// Malformed input.
    ValidationFailed { field: String, message: String },
    /// Durable-store failure, surfaced as-is without retry.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn agenda_not_found(id: AgendaId) -> Self {
        SessionError::AgendaNotFound(id)
    }

    pub fn conflict(agenda_id: AgendaId) -> Self {
        SessionError::Conflict(agenda_id)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        SessionError::InvalidState(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    /// Stable outcome code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::AgendaNotFound(_) => ErrorCode::AgendaNotFound,
            SessionError::Conflict(_) => ErrorCode::SessionConflict,
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Caller-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Voting session not found: {}", id),
            SessionError::AgendaNotFound(id) => format!("Agenda not found: {}", id),
            SessionError::Conflict(agenda_id) => format!(
                "A pending or active voting session already exists for agenda {}",
                agenda_id
            ),
            SessionError::InvalidState(msg) => format!("Invalid state: {}", msg),
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SessionError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => SessionError::InvalidState(err.message),
            ErrorCode::ValidationFailed => SessionError::ValidationFailed {
                field: "duration_minutes".to_string(),
                message: err.message,
            },
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn error_codes_are_stable() {
        let session_id = SessionId::new();
        let agenda_id = AgendaId::from_uuid(Uuid::new_v4());

        assert_eq!(
            SessionError::not_found(session_id).code(),
            ErrorCode::SessionNotFound
        );
        assert_eq!(
            SessionError::conflict(agenda_id).code(),
            ErrorCode::SessionConflict
        );
        assert_eq!(
            SessionError::invalid_state("already closed").code(),
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn conflict_message_names_the_agenda() {
        let agenda_id = AgendaId::from_uuid(Uuid::new_v4());
        let msg = SessionError::conflict(agenda_id).message();
        assert!(msg.contains(&agenda_id.to_string()));
    }

    #[test]
    fn domain_error_maps_to_invalid_state() {
        let err: SessionError =
            DomainError::new(ErrorCode::InvalidStateTransition, "cannot start").into();
        assert!(matches!(err, SessionError::InvalidState(_)));
    }
}
