//! Vote record entity.
//!
//! A vote is created once at admission time and never mutated, retracted, or
//! deleted. Uniqueness per (session, voter) is enforced by the ledger's
//! atomic insert, not by this type.

use crate::domain::foundation::{SessionId, Timestamp, VoteId, VoterId};
use crate::domain::vote::Ballot;
use serde::{Deserialize, Serialize};

/// An admitted vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Unique identifier for this vote.
    id: VoteId,

    /// Session the vote was cast in.
    session_id: SessionId,

    /// Voter who cast it (not owned, resolved externally).
    voter_id: VoterId,

    /// The yes/no choice.
    ballot: Ballot,

    /// When the vote was admitted.
    cast_at: Timestamp,
}

impl Vote {
    /// Creates a new vote record with a fresh id.
    pub fn new(session_id: SessionId, voter_id: VoterId, ballot: Ballot, cast_at: Timestamp) -> Self {
        Self {
            id: VoteId::new(),
            session_id,
            voter_id,
            ballot,
            cast_at,
        }
    }

    /// Reconstitute a vote from persistence.
    pub fn reconstitute(
        id: VoteId,
        session_id: SessionId,
        voter_id: VoterId,
        ballot: Ballot,
        cast_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            voter_id,
            ballot,
            cast_at,
        }
    }

    /// Returns the vote ID.
    pub fn id(&self) -> &VoteId {
        &self.id
    }

    /// Returns the session the vote belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the voter who cast it.
    pub fn voter_id(&self) -> &VoterId {
        &self.voter_id
    }

    /// Returns the ballot value.
    pub fn ballot(&self) -> Ballot {
        self.ballot
    }

    /// Returns when the vote was admitted.
    pub fn cast_at(&self) -> &Timestamp {
        &self.cast_at
    }
}
