//! In-memory SessionStore adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, SessionStatus, Timestamp};
use crate::domain::session::VotingSession;
use crate::ports::SessionStore;

/// In-memory session storage.
///
/// Conditional writes hold the map's write lock for the whole
/// check-and-write, which gives the same exactly-one-winner guarantee the
/// SQL adapter gets from a conditional UPDATE and a partial unique index.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, VotingSession>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions (for tests).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &VotingSession) -> Result<bool, DomainError> {
        // The open-agenda check and the write share one lock acquisition, so
        // racing creates cannot both observe an agenda without an open round.
        let mut sessions = self.sessions.write().await;
        let blocked = session.status().is_open()
            && sessions
                .values()
                .any(|s| s.agenda_id() == session.agenda_id() && s.status().is_open());
        if blocked {
            return Ok(false);
        }
        sessions.insert(*session.id(), session.clone());
        Ok(true)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<VotingSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn transition(
        &self,
        session: &VotingSession,
        expected: SessionStatus,
    ) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(session.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )
        })?;

        if stored.status() != expected {
            return Ok(false);
        }

        *stored = session.clone();
        Ok(true)
    }

    async fn find_expired(
        &self,
        now: Timestamp,
        limit: u32,
    ) -> Result<Vec<VotingSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .filter(|s| s.status() == SessionStatus::Active && s.is_expired(now))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
