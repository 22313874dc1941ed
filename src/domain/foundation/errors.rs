//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum { field: String, min: i64, actual: i64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a below-minimum validation error.
    pub fn below_minimum(field: impl Into<String>, min: i64, actual: i64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
///
/// Each code is a stable, client-facing outcome so callers can distinguish
/// "vote rejected because already cast" from "vote rejected because the
/// session expired".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    AgendaNotFound,
    SessionNotFound,
    VoterNotFound,

    // State errors
    SessionConflict,
    InvalidStateTransition,
    SessionExpired,
    AlreadyVoted,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::AgendaNotFound => "AGENDA_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::VoterNotFound => "VOTER_NOT_FOUND",
            ErrorCode::SessionConflict => "SESSION_CONFLICT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::SessionExpired => "SESSION_EXPIRED",
            ErrorCode::AlreadyVoted => "ALREADY_VOTED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// This is the carrier type at the port boundary; application handlers map
/// it into their module-specific error enums.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a database error from an underlying store failure.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("agenda_id");
        assert_eq!(format!("{}", err), "Field 'agenda_id' cannot be empty");
    }

    #[test]
    fn validation_error_below_minimum_displays_correctly() {
        let err = ValidationError::below_minimum("duration_minutes", 1, 0);
        assert_eq!(
            format!("{}", err),
            "Field 'duration_minutes' must be at least 1, got 0"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "Session not found");
        assert_eq!(format!("{}", err), "[SESSION_NOT_FOUND] Session not found");
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::below_minimum("duration_minutes", 1, 0).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("duration_minutes"));
    }

    #[test]
    fn domain_error_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::database("connection lost"));
        assert_eq!(err.to_string(), "[DATABASE_ERROR] connection lost");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SessionExpired), "SESSION_EXPIRED");
        assert_eq!(format!("{}", ErrorCode::AlreadyVoted), "ALREADY_VOTED");
        assert_eq!(format!("{}", ErrorCode::SessionConflict), "SESSION_CONFLICT");
    }
}
