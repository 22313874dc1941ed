//! In-memory VoteLedger adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId, VoterId};
use crate::domain::tally::BallotCounts;
use crate::domain::vote::{Ballot, Vote};
use crate::ports::VoteLedger;

/// In-memory vote storage keyed by (session, voter).
///
/// `insert` holds the write lock across the existence check and the write,
/// mirroring the unique-index guarantee of the SQL adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoteLedger {
    votes: Arc<RwLock<HashMap<(SessionId, VoterId), Vote>>>,
}

impl InMemoryVoteLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded votes (for tests).
    pub async fn len(&self) -> usize {
        self.votes.read().await.len()
    }

    /// Returns true if no votes are recorded.
    pub async fn is_empty(&self) -> bool {
        self.votes.read().await.is_empty()
    }
}

#[async_trait]
impl VoteLedger for InMemoryVoteLedger {
    async fn insert(&self, vote: &Vote) -> Result<bool, DomainError> {
        let mut votes = self.votes.write().await;
        let key = (*vote.session_id(), *vote.voter_id());
        if votes.contains_key(&key) {
            return Ok(false);
        }
        votes.insert(key, vote.clone());
        Ok(true)
    }

    async fn has_voted(
        &self,
        session_id: &SessionId,
        voter_id: &VoterId,
    ) -> Result<bool, DomainError> {
        let votes = self.votes.read().await;
        Ok(votes.contains_key(&(*session_id, *voter_id)))
    }

    async fn count_ballots(&self, session_id: &SessionId) -> Result<BallotCounts, DomainError> {
        let votes = self.votes.read().await;
        let mut counts = BallotCounts::default();
        for vote in votes.values().filter(|v| v.session_id() == session_id) {
            match vote.ballot() {
                Ballot::Yes => counts.yes += 1,
                Ballot::No => counts.no += 1,
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use uuid::Uuid;

    fn voter() -> VoterId {
        VoterId::from_uuid(Uuid::new_v4())
    }

    #[tokio::test]
    async fn first_insert_is_accepted_second_rejected() {
        let ledger = InMemoryVoteLedger::new();
        let session_id = SessionId::new();
        let voter_id = voter();

        let first = Vote::new(session_id, voter_id, Ballot::Yes, Timestamp::now());
        let second = Vote::new(session_id, voter_id, Ballot::No, Timestamp::now());

        assert!(ledger.insert(&first).await.unwrap());
        assert!(!ledger.insert(&second).await.unwrap());
        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn same_voter_may_vote_in_different_sessions() {
        let ledger = InMemoryVoteLedger::new();
        let voter_id = voter();

        let a = Vote::new(SessionId::new(), voter_id, Ballot::Yes, Timestamp::now());
        let b = Vote::new(SessionId::new(), voter_id, Ballot::No, Timestamp::now());

        assert!(ledger.insert(&a).await.unwrap());
        assert!(ledger.insert(&b).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_inserts_for_same_pair_admit_exactly_one() {
        let ledger = InMemoryVoteLedger::new();
        let session_id = SessionId::new();
        let voter_id = voter();

        let mut handles = Vec::new();
        for i in 0..16 {
            let ledger = ledger.clone();
            let ballot = if i % 2 == 0 { Ballot::Yes } else { Ballot::No };
            handles.push(tokio::spawn(async move {
                let vote = Vote::new(session_id, voter_id, ballot, Timestamp::now());
                ledger.insert(&vote).await.unwrap()
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn count_ballots_scans_one_session_only() {
        let ledger = InMemoryVoteLedger::new();
        let session_id = SessionId::new();
        let other_session = SessionId::new();

        for _ in 0..3 {
            let v = Vote::new(session_id, voter(), Ballot::Yes, Timestamp::now());
            ledger.insert(&v).await.unwrap();
        }
        let v = Vote::new(session_id, voter(), Ballot::No, Timestamp::now());
        ledger.insert(&v).await.unwrap();
        let v = Vote::new(other_session, voter(), Ballot::No, Timestamp::now());
        ledger.insert(&v).await.unwrap();

        let counts = ledger.count_ballots(&session_id).await.unwrap();
        assert_eq!(counts, BallotCounts::new(3, 1));
    }

    #[tokio::test]
    async fn count_ballots_on_empty_session_is_zero() {
        let ledger = InMemoryVoteLedger::new();
        let counts = ledger.count_ballots(&SessionId::new()).await.unwrap();
        assert_eq!(counts, BallotCounts::default());
    }
}
