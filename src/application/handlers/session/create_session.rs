//! CreateSessionHandler - Command handler for opening a new voting round.

use std::sync::Arc;

use crate::domain::foundation::{AgendaId, SessionId};
use crate::domain::session::{SessionError, VotingSession, DEFAULT_DURATION_MINUTES};
use crate::ports::{AgendaDirectory, Clock, SessionStore};

/// Command to create a new voting session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub agenda_id: AgendaId,
    /// Minutes the round stays open once started; defaults to 1.
    pub duration_minutes: Option<u32>,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
    agendas: Arc<dyn AgendaDirectory>,
    clock: Arc<dyn Clock>,
}

impl CreateSessionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        agendas: Arc<dyn AgendaDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            agendas,
            clock,
        }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<VotingSession, SessionError> {
        // 1. Resolve the agenda through the external directory
        if !self.agendas.agenda_exists(&cmd.agenda_id).await? {
            return Err(SessionError::agenda_not_found(cmd.agenda_id));
        }

        // 2. Build the pending aggregate
        let duration = cmd.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
        let session = VotingSession::new(
            SessionId::new(),
            cmd.agenda_id,
            duration,
            self.clock.now(),
        )?;

        // 3. Persist. The store refuses the write when the agenda already
        // has an open session, so racing creates admit exactly one.
        if !self.store.insert(&session).await? {
            return Err(SessionError::conflict(cmd.agenda_id));
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryDirectory, InMemorySessionStore};
    use crate::adapters::ManualClock;
    use crate::domain::foundation::{SessionStatus, Timestamp};
    use uuid::Uuid;

    fn handler() -> (
        CreateSessionHandler,
        Arc<InMemorySessionStore>,
        Arc<InMemoryDirectory>,
    ) {
        let store = Arc::new(InMemorySessionStore::new());
        let directory = Arc::new(InMemoryDirectory::new());
        let clock = Arc::new(ManualClock::starting_at(Timestamp::from_unix_secs(
            1_700_000_000,
        )));
        let handler = CreateSessionHandler::new(store.clone(), directory.clone(), clock);
        (handler, store, directory)
    }

    #[tokio::test]
    async fn creates_pending_session_for_known_agenda() {
        let (handler, store, directory) = handler();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        directory.add_agenda(agenda).await;

        let session = handler
            .handle(CreateSessionCommand {
                agenda_id: agenda,
                duration_minutes: Some(5),
            })
            .await
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Pending);
        assert_eq!(session.duration_minutes(), 5);
        assert!(session.deadline().is_none());
        assert!(store.find_by_id(session.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn defaults_duration_to_one_minute() {
        let (handler, _store, directory) = handler();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        directory.add_agenda(agenda).await;

        let session = handler
            .handle(CreateSessionCommand {
                agenda_id: agenda,
                duration_minutes: None,
            })
            .await
            .unwrap();

        assert_eq!(session.duration_minutes(), 1);
    }

    #[tokio::test]
    async fn rejects_zero_duration() {
        let (handler, store, directory) = handler();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        directory.add_agenda(agenda).await;

        let result = handler
            .handle(CreateSessionCommand {
                agenda_id: agenda,
                duration_minutes: Some(0),
            })
            .await;

        assert!(matches!(result, Err(SessionError::ValidationFailed { .. })));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn rejects_unknown_agenda() {
        let (handler, _store, _directory) = handler();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());

        let result = handler
            .handle(CreateSessionCommand {
                agenda_id: agenda,
                duration_minutes: Some(5),
            })
            .await;

        assert_eq!(result, Err(SessionError::AgendaNotFound(agenda)));
    }

    #[tokio::test]
    async fn second_session_for_same_agenda_conflicts() {
        let (handler, _store, directory) = handler();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        directory.add_agenda(agenda).await;

        handler
            .handle(CreateSessionCommand {
                agenda_id: agenda,
                duration_minutes: Some(1),
            })
            .await
            .unwrap();

        let second = handler
            .handle(CreateSessionCommand {
                agenda_id: agenda,
                duration_minutes: Some(1),
            })
            .await;

        assert_eq!(second, Err(SessionError::Conflict(agenda)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_for_one_agenda_admit_exactly_one() {
        let (handler, store, directory) = handler();
        let handler = Arc::new(handler);
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        directory.add_agenda(agenda).await;

        let barrier = Arc::new(tokio::sync::Barrier::new(8));
        let mut tasks = Vec::new();
        for _ in 0..8 {
            let handler = handler.clone();
            let barrier = barrier.clone();
            tasks.push(tokio::spawn(async move {
                barrier.wait().await;
                handler
                    .handle(CreateSessionCommand {
                        agenda_id: agenda,
                        duration_minutes: Some(1),
                    })
                    .await
            }));
        }

        let mut created = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => created += 1,
                Err(SessionError::Conflict(id)) => assert_eq!(id, agenda),
                Err(other) => panic!("unexpected: {:?}", other),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len().await, 1);
    }
}
