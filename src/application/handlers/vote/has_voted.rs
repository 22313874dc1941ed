//! HasVotedHandler - Query handler for the has-voted lookup.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, VoterId};
use crate::domain::vote::VoteError;
use crate::ports::VoteLedger;

/// Query asking whether a voter has voted in a session.
#[derive(Debug, Clone)]
pub struct HasVotedQuery {
    pub session_id: SessionId,
    pub voter_id: VoterId,
}

/// Handler for the has-voted lookup.
pub struct HasVotedHandler {
    ledger: Arc<dyn VoteLedger>,
}

impl HasVotedHandler {
    pub fn new(ledger: Arc<dyn VoteLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, query: HasVotedQuery) -> Result<bool, VoteError> {
        self.ledger
            .has_voted(&query.session_id, &query.voter_id)
            .await
            .map_err(|e| VoteError::infrastructure(e.to_string()))
    }
}
