//! Session store port.
//!
//! Defines the contract for persisting and retrieving VotingSession records.
//!
//! # Design
//!
//! The store is the single source of truth for session state. All concurrent
//! coordination goes through conditional writes: [`SessionStore::insert`]
//! refuses a second open session per agenda, and
//! [`SessionStore::transition`] is a compare-and-set on status, so two
//! racing `create` or `start` calls resolve to exactly one winner without
//! any in-process lock.

use crate::domain::foundation::{DomainError, SessionId, SessionStatus, Timestamp};
use crate::domain::session::VotingSession;
use async_trait::async_trait;

/// Durable keyed storage for voting sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a newly created session.
    ///
    /// The write is conditional on the one-open-session-per-agenda rule:
    /// returns `Ok(false)` without writing when a pending or active session
    /// already exists for the agenda, so two racing creates resolve to
    /// exactly one stored row.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, session: &VotingSession) -> Result<bool, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<VotingSession>, DomainError>;

    /// Atomically persist a status transition.
    ///
    /// Writes the session's current state only if the stored status still
    /// equals `expected`. Returns `Ok(false)` when the conditional write
    /// finds a different stored status (the caller lost the race); the
    /// record is left untouched in that case.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session no longer exists
    /// - `DatabaseError` on persistence failure
    async fn transition(
        &self,
        session: &VotingSession,
        expected: SessionStatus,
    ) -> Result<bool, DomainError>;

    /// List active sessions whose deadline has passed at `now`.
    ///
    /// Used by the expiration sweep; `limit` bounds one batch.
    async fn find_expired(
        &self,
        now: Timestamp,
        limit: u32,
    ) -> Result<Vec<VotingSession>, DomainError>;
}
