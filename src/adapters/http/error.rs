//! Shared HTTP error envelope.
//!
//! All endpoints answer failures with the same JSON shape carrying the
//! stable outcome code alongside a human-readable message. Clients branch
//! on `code`, never on the message text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}

/// Maps a stable outcome code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::SessionNotFound | ErrorCode::AgendaNotFound | ErrorCode::VoterNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SessionConflict => StatusCode::CONFLICT,
        ErrorCode::InvalidStateTransition
        | ErrorCode::SessionExpired
        | ErrorCode::AlreadyVoted => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the full error response for a stable code and message.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    (status_for(code), Json(ErrorResponse::new(code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(ErrorCode::SessionNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::AgendaNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::VoterNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        assert_eq!(status_for(ErrorCode::SessionConflict), StatusCode::CONFLICT);
    }

    #[test]
    fn business_rule_rejections_map_to_422() {
        assert_eq!(
            status_for(ErrorCode::InvalidStateTransition),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(ErrorCode::SessionExpired),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(ErrorCode::AlreadyVoted),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn error_response_carries_stable_code() {
        let body = ErrorResponse::new(ErrorCode::SessionExpired, "too late");
        assert_eq!(body.code, "SESSION_EXPIRED");
        assert_eq!(body.message, "too late");
    }
}
