//! GetTallyHandler - Query handler computing a session's result.
//!
//! Valid for active sessions (live tally) and closed sessions (final
//! tally); only a pending session has no meaningful result. The scan is
//! read-only and needs no locking: votes are immutable once written.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, SessionStatus};
use crate::domain::tally::{Tally, TallyError};
use crate::ports::{SessionStore, VoteLedger};

/// Query for a session's tally.
#[derive(Debug, Clone)]
pub struct GetTallyQuery {
    pub session_id: SessionId,
}

/// Handler computing vote counts and the outcome label.
pub struct GetTallyHandler {
    sessions: Arc<dyn SessionStore>,
    ledger: Arc<dyn VoteLedger>,
}

impl GetTallyHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, ledger: Arc<dyn VoteLedger>) -> Self {
        Self { sessions, ledger }
    }

    pub async fn handle(&self, query: GetTallyQuery) -> Result<Tally, TallyError> {
        let session = self
            .sessions
            .find_by_id(&query.session_id)
            .await
            .map_err(|e| TallyError::Infrastructure(e.to_string()))?
            .ok_or_else(|| TallyError::session_not_found(query.session_id))?;

        if session.status() == SessionStatus::Pending {
            return Err(TallyError::not_started(query.session_id));
        }

        let counts = self
            .ledger
            .count_ballots(&query.session_id)
            .await
            .map_err(|e| TallyError::Infrastructure(e.to_string()))?;

        Ok(Tally::from_counts(counts))
    }
}
