//! Vote ledger port.
//!
//! Durable storage for votes with a uniqueness constraint on
//! (session, voter). The atomic insert-or-reject in [`VoteLedger::insert`]
//! is the central concurrency contract of the whole core: of two racing
//! submissions for the same pair, exactly one is admitted.

use crate::domain::foundation::{DomainError, SessionId, VoterId};
use crate::domain::tally::BallotCounts;
use crate::domain::vote::Vote;
use async_trait::async_trait;

/// Append-only vote storage keyed by (session, voter).
#[async_trait]
pub trait VoteLedger: Send + Sync {
    /// Atomically insert a vote unless one already exists for its
    /// (session, voter) pair.
    ///
    /// Returns `Ok(true)` when the vote was recorded and `Ok(false)` when a
    /// vote for the pair already existed. Implementations must make this
    /// race-free: concurrent inserts for the same pair yield exactly one
    /// `true`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, vote: &Vote) -> Result<bool, DomainError>;

    /// Check whether the voter has already voted in the session.
    async fn has_voted(
        &self,
        session_id: &SessionId,
        voter_id: &VoterId,
    ) -> Result<bool, DomainError>;

    /// Scan the ledger for the session's yes/no counts.
    ///
    /// Read-only; votes are immutable once written, so the returned counts
    /// are a stable snapshot as of the read.
    async fn count_ballots(&self, session_id: &SessionId) -> Result<BallotCounts, DomainError>;
}
