//! StartSessionHandler - Command handler for activating a pending session.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, SessionStatus};
use crate::domain::session::{SessionError, VotingSession};
use crate::ports::{Clock, SessionStore};

/// Command to start a voting session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub session_id: SessionId,
}

/// Handler for starting sessions.
///
/// Activation is a single conditional write: the transition only lands if
/// the stored status is still Pending, so of two concurrent starts exactly
/// one succeeds and the other observes an invalid-state error.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<VotingSession, SessionError> {
        // 1. Load
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 2. Apply the transition in memory; fixes start time and deadline
        session.start(self.clock.now())?;

        // 3. Conditional write: only lands if the stored row is still Pending
        let won = self
            .store
            .transition(&session, SessionStatus::Pending)
            .await?;
        if !won {
            return Err(SessionError::invalid_state(
                "session was started or closed concurrently",
            ));
        }

        Ok(session)
    }
}
