//! VotingSession aggregate entity.
//!
//! A session is one time-boxed voting round over a single agenda. Votes are
//! not owned by the session; they are flat records in the vote ledger keyed
//! by session id.
//!
//! # Ownership
//!
//! The session lifecycle handlers exclusively own writes to status,
//! start_time, and deadline. All concurrent coordination happens through the
//! store's conditional transition, never through in-process locks.

use crate::domain::foundation::{
    AgendaId, DomainError, ErrorCode, SessionId, SessionStatus, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Duration applied when a create request does not specify one.
pub const DEFAULT_DURATION_MINUTES: u32 = 1;

/// VotingSession aggregate - a time-boxed voting round over one agenda.
///
/// # Invariants
///
/// - Status transitions are monotonic: Pending -> Active -> Closed
/// - `duration_minutes` is a positive integer
/// - `start_time` and `deadline` are set exactly once, on activation
/// - `deadline == start_time + duration_minutes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// Agenda this round votes on (not owned, resolved externally).
    agenda_id: AgendaId,

    /// Current lifecycle status.
    status: SessionStatus,

    /// How long the round stays open once started, in minutes.
    duration_minutes: u32,

    /// When the session was activated. None while Pending.
    start_time: Option<Timestamp>,

    /// Cutoff after which votes are rejected. None while Pending.
    deadline: Option<Timestamp>,

    /// When the session record was created.
    created_at: Timestamp,
}

impl VotingSession {
    /// Create a new pending session.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `duration_minutes` is zero
    pub fn new(
        id: SessionId,
        agenda_id: AgendaId,
        duration_minutes: u32,
        created_at: Timestamp,
    ) -> Result<Self, DomainError> {
        if duration_minutes == 0 {
            return Err(ValidationError::below_minimum("duration_minutes", 1, 0).into());
        }

        Ok(Self {
            id,
            agenda_id,
            status: SessionStatus::Pending,
            duration_minutes,
            start_time: None,
            deadline: None,
            created_at,
        })
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        agenda_id: AgendaId,
        status: SessionStatus,
        duration_minutes: u32,
        start_time: Option<Timestamp>,
        deadline: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            agenda_id,
            status,
            duration_minutes,
            start_time,
            deadline,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the agenda this session votes on.
    pub fn agenda_id(&self) -> &AgendaId {
        &self.agenda_id
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the configured duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns when the session was started, if it has been.
    pub fn start_time(&self) -> Option<&Timestamp> {
        self.start_time.as_ref()
    }

    /// Returns the voting deadline, if the session has been started.
    pub fn deadline(&self) -> Option<&Timestamp> {
        self.deadline.as_ref()
    }

    /// Returns when the session record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if the deadline has passed at `now`.
    ///
    /// A session without a deadline (never started) is never expired.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) => now.is_after(&deadline),
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Activate the session, fixing its start time and deadline.
    ///
    /// The deadline is `now + duration_minutes` and is immutable afterwards.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the session is Pending
    pub fn start(&mut self, now: Timestamp) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&SessionStatus::Active) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("cannot start a session in status {}", self.status),
            ));
        }

        self.status = SessionStatus::Active;
        self.start_time = Some(now);
        self.deadline = Some(now.plus_minutes(self.duration_minutes));
        Ok(())
    }

    /// Close the session.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the session is Active
    pub fn close(&mut self) -> Result<(), DomainError> {
        if self.status != SessionStatus::Active {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("cannot close a session in status {}", self.status),
            ));
        }

        self.status = SessionStatus::Closed;
        Ok(())
    }
}
