//! GetSessionHandler - Query handler for retrieving session details.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, VotingSession};
use crate::ports::SessionStore;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<VotingSession, SessionError> {
        self.store
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::foundation::{AgendaId, Timestamp};
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_stored_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = VotingSession::new(
            SessionId::new(),
            AgendaId::from_uuid(Uuid::new_v4()),
            3,
            Timestamp::now(),
        )
        .unwrap();
        store.insert(&session).await.unwrap();

        let handler = GetSessionHandler::new(store);
        let found = handler
            .handle(GetSessionQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetSessionHandler::new(store);
        let missing = SessionId::new();

        let result = handler
            .handle(GetSessionQuery {
                session_id: missing,
            })
            .await;

        assert_eq!(result, Err(SessionError::NotFound(missing)));
    }
}
