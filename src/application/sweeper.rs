//! ExpirationSweeper - background service closing overdue sessions.
//!
//! Sessions must close when their deadline elapses even if no further votes
//! arrive, so the sweep polls the store rather than waiting on traffic:
//! 1. Query active sessions whose deadline has passed.
//! 2. Close each through the same handler as a manual close.
//!
//! A session closed concurrently (another sweep tick, a manual close) is
//! already-satisfied and skipped. Failures on one session are logged and do
//! not abort the rest of the batch. Re-running a tick on an already-closed
//! session is a no-op, so the sweep is idempotent.
//!
//! ## Graceful shutdown
//!
//! The service listens on a watch channel and completes the current tick
//! before stopping.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::application::handlers::session::{CloseSessionCommand, CloseSessionHandler};
use crate::domain::session::SessionError;
use crate::ports::{Clock, SessionStore};

/// Configuration for the ExpirationSweeper service.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to scan for overdue sessions.
    pub interval: Duration,

    /// Maximum sessions to close per tick.
    pub batch_size: u32,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            batch_size: 100,
        }
    }
}

impl SweeperConfig {
    /// Create config with a custom scan interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Create config with a custom batch size.
    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.batch_size = size;
        self
    }
}

/// Background service that closes active sessions past their deadline.
pub struct ExpirationSweeper {
    store: Arc<dyn SessionStore>,
    closer: Arc<CloseSessionHandler>,
    clock: Arc<dyn Clock>,
    config: SweeperConfig,
}

impl ExpirationSweeper {
    /// Create a new sweeper with default configuration.
    pub fn new(
        store: Arc<dyn SessionStore>,
        closer: Arc<CloseSessionHandler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            closer,
            clock,
            config: SweeperConfig::default(),
        }
    }

    /// Create a new sweeper with custom configuration.
    pub fn with_config(
        store: Arc<dyn SessionStore>,
        closer: Arc<CloseSessionHandler>,
        clock: Arc<dyn Clock>,
        config: SweeperConfig,
    ) -> Self {
        Self {
            store,
            closer,
            clock,
            config,
        }
    }

    /// Run the sweep loop until the shutdown signal fires.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.interval);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        // Shutdown requested - finish one last tick then exit
                        self.sweep_once().await;
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }

    /// Run exactly one sweep tick; returns how many sessions were closed.
    ///
    /// Public so tests can drive the sweep deterministically with a manual
    /// clock instead of running the full loop.
    pub async fn sweep_once(&self) -> usize {
        let now = self.clock.now();

        let expired = match self.store.find_expired(now, self.config.batch_size).await {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::error!(error = %e, "expiration sweep could not query overdue sessions");
                return 0;
            }
        };

        let mut closed = 0;
        for session in expired {
            let session_id = *session.id();
            match self
                .closer
                .handle(CloseSessionCommand { session_id })
                .await
            {
                Ok(_) => {
                    tracing::info!(%session_id, "closed expired voting session");
                    closed += 1;
                }
                // Lost the race to another closer: already satisfied.
                Err(SessionError::InvalidState(_)) | Err(SessionError::NotFound(_)) => {}
                Err(e) => {
                    // Partial-failure isolation: report and keep sweeping.
                    tracing::warn!(%session_id, error = %e, "failed to close expired session");
                }
            }
        }

        if closed > 0 {
            tracing::info!(closed, "expiration sweep tick finished");
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::adapters::ManualClock;
    use crate::domain::foundation::{AgendaId, SessionId, SessionStatus, Timestamp};
    use crate::domain::session::VotingSession;
    use uuid::Uuid;

    struct Fixture {
        sweeper: ExpirationSweeper,
        store: Arc<InMemorySessionStore>,
        clock: Arc<ManualClock>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemorySessionStore::new());
        let clock = Arc::new(ManualClock::starting_at(Timestamp::from_unix_secs(
            1_700_000_000,
        )));
        let closer = Arc::new(CloseSessionHandler::new(store.clone()));
        let sweeper = ExpirationSweeper::new(store.clone(), closer, clock.clone());
        Fixture {
            sweeper,
            store,
            clock,
        }
    }

    async fn active_session(f: &Fixture, duration: u32) -> SessionId {
        let mut session = VotingSession::new(
            SessionId::new(),
            AgendaId::from_uuid(Uuid::new_v4()),
            duration,
            f.clock.now(),
        )
        .unwrap();
        session.start(f.clock.now()).unwrap();
        f.store.insert(&session).await.unwrap();
        *session.id()
    }

    #[tokio::test]
    async fn closes_sessions_past_their_deadline() {
        let f = fixture();
        let overdue = active_session(&f, 1).await;
        let running = active_session(&f, 60).await;

        f.clock.advance_minutes(5);
        let closed = f.sweeper.sweep_once().await;

        assert_eq!(closed, 1);
        assert_eq!(
            f.store.find_by_id(&overdue).await.unwrap().unwrap().status(),
            SessionStatus::Closed
        );
        assert_eq!(
            f.store.find_by_id(&running).await.unwrap().unwrap().status(),
            SessionStatus::Active
        );
    }

    #[tokio::test]
    async fn tick_with_nothing_overdue_closes_nothing() {
        let f = fixture();
        active_session(&f, 60).await;

        assert_eq!(f.sweeper.sweep_once().await, 0);
    }

    #[tokio::test]
    async fn repeat_tick_is_a_no_op() {
        let f = fixture();
        active_session(&f, 1).await;
        f.clock.advance_minutes(5);

        assert_eq!(f.sweeper.sweep_once().await, 1);
        assert_eq!(f.sweeper.sweep_once().await, 0);
    }

    #[tokio::test]
    async fn pending_sessions_are_never_swept() {
        let f = fixture();
        let pending = VotingSession::new(
            SessionId::new(),
            AgendaId::from_uuid(Uuid::new_v4()),
            1,
            f.clock.now(),
        )
        .unwrap();
        f.store.insert(&pending).await.unwrap();

        f.clock.advance_minutes(60);
        assert_eq!(f.sweeper.sweep_once().await, 0);
        assert_eq!(
            f.store.find_by_id(pending.id()).await.unwrap().unwrap().status(),
            SessionStatus::Pending
        );
    }

    #[tokio::test]
    async fn concurrently_closed_session_is_skipped_silently() {
        let f = fixture();
        let id = active_session(&f, 1).await;
        f.clock.advance_minutes(5);

        // Manual close beats the sweep to it.
        let mut closed = f.store.find_by_id(&id).await.unwrap().unwrap();
        closed.close().unwrap();
        f.store
            .transition(&closed, SessionStatus::Active)
            .await
            .unwrap();

        assert_eq!(f.sweeper.sweep_once().await, 0);
    }

    #[tokio::test]
    async fn run_loop_stops_on_shutdown_signal() {
        let f = fixture();
        let sweeper = Arc::new(f.sweeper);
        let (tx, rx) = watch::channel(false);

        let task = tokio::spawn({
            let sweeper = sweeper.clone();
            async move { sweeper.run(rx).await }
        });

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("sweeper did not stop on shutdown")
            .unwrap();
    }
}
