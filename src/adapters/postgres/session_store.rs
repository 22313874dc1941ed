//! PostgreSQL implementation of SessionStore.
//!
//! Persists VotingSession aggregates to PostgreSQL. Status transitions go
//! through a conditional UPDATE so that racing writers resolve to one
//! winner inside the database, never in process memory.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    AgendaId, DomainError, ErrorCode, SessionId, SessionStatus, Timestamp,
};
use crate::domain::session::VotingSession;
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn insert(&self, session: &VotingSession) -> Result<bool, DomainError> {
        // The conflict target is the partial unique index on open sessions,
        // so a raced second create affects zero rows instead of erroring.
        let result = sqlx::query(
            r#"
            INSERT INTO voting_sessions (
                id, agenda_id, status, duration_minutes, start_time, deadline, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (agenda_id) WHERE status IN ('pending', 'active') DO NOTHING
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.agenda_id().as_uuid())
        .bind(status_to_str(session.status()))
        .bind(session.duration_minutes() as i32)
        .bind(session.start_time().map(|t| *t.as_datetime()))
        .bind(session.deadline().map(|t| *t.as_datetime()))
        .bind(session.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert voting session: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<VotingSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, agenda_id, status, duration_minutes, start_time, deadline, created_at
            FROM voting_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch voting session: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_session(row)?)),
            None => Ok(None),
        }
    }

    async fn transition(
        &self,
        session: &VotingSession,
        expected: SessionStatus,
    ) -> Result<bool, DomainError> {
        // The WHERE clause on status makes this a compare-and-set: a stale
        // writer affects zero rows and the stored record is untouched.
        let result = sqlx::query(
            r#"
            UPDATE voting_sessions SET
                status = $2,
                start_time = $3,
                deadline = $4
            WHERE id = $1 AND status = $5
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(status_to_str(session.status()))
        .bind(session.start_time().map(|t| *t.as_datetime()))
        .bind(session.deadline().map(|t| *t.as_datetime()))
        .bind(status_to_str(expected))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to transition voting session: {}", e),
            )
        })?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // Zero rows: distinguish a lost race from a missing session.
        let exists: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM voting_sessions WHERE id = $1")
                .bind(session.id().as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check voting session existence: {}", e),
                    )
                })?;

        if exists.0 == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Voting session not found: {}", session.id()),
            ));
        }

        Ok(false)
    }

    async fn find_expired(
        &self,
        now: Timestamp,
        limit: u32,
    ) -> Result<Vec<VotingSession>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, agenda_id, status, duration_minutes, start_time, deadline, created_at
            FROM voting_sessions
            WHERE status = 'active' AND deadline < $1
            ORDER BY deadline ASC
            LIMIT $2
            "#,
        )
        .bind(now.as_datetime())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch expired voting sessions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn status_to_str(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Pending => "pending",
        SessionStatus::Active => "active",
        SessionStatus::Closed => "closed",
    }
}

fn str_to_status(s: &str) -> Result<SessionStatus, DomainError> {
    match s {
        "pending" => Ok(SessionStatus::Pending),
        "active" => Ok(SessionStatus::Active),
        "closed" => Ok(SessionStatus::Closed),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )),
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<VotingSession, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let agenda_id: uuid::Uuid = row.try_get("agenda_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get agenda_id: {}", e),
        )
    })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_status(&status_str)?;

    let duration_minutes: i32 = row.try_get("duration_minutes").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get duration_minutes: {}", e),
        )
    })?;

    let start_time: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("start_time").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to get start_time: {}", e),
            )
        })?;

    let deadline: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("deadline").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to get deadline: {}", e),
            )
        })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    Ok(VotingSession::reconstitute(
        SessionId::from_uuid(id),
        AgendaId::from_uuid(agenda_id),
        status,
        duration_minutes as u32,
        start_time.map(Timestamp::from_datetime),
        deadline.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
    ))
}
