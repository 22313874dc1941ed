//! CloseSessionHandler - Command handler for closing an active session.
//!
//! Shared by the manual close endpoint and the expiration sweep; the sweep
//! treats a lost race here as already-satisfied.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, SessionStatus};
use crate::domain::session::{SessionError, VotingSession};
use crate::ports::SessionStore;

/// Command to close a voting session.
#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: SessionId,
}

/// Handler for closing sessions.
pub struct CloseSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl CloseSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CloseSessionCommand) -> Result<VotingSession, SessionError> {
        // 1. Load
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 2. Apply the transition in memory
        session.close()?;

        // 3. Conditional write: only lands if the stored row is still Active
        let won = self
            .store
            .transition(&session, SessionStatus::Active)
            .await?;
        if !won {
            return Err(SessionError::invalid_state(
                "session was closed concurrently",
            ));
        }

        Ok(session)
    }
}
