//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, timestamp value object, status enum, and error
//! types that form the vocabulary of the voting domain.

mod errors;
mod ids;
mod session_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AgendaId, SessionId, VoteId, VoterId};
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
