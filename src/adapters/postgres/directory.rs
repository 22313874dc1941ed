//! PostgreSQL implementation of AgendaDirectory and VoterRegistry.
//!
//! Looks up agendas and voters in their reference tables. Voter rows carry
//! an `active` flag so eligibility can be revoked without deleting history.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{AgendaId, DomainError, ErrorCode, VoterId};
use crate::ports::{AgendaDirectory, VoterRegistry};

/// PostgreSQL-backed lookup for agendas and voters.
#[derive(Clone)]
pub struct PostgresDirectory {
    pool: PgPool,
}

impl PostgresDirectory {
    /// Creates a new PostgresDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgendaDirectory for PostgresDirectory {
    async fn agenda_exists(&self, agenda_id: &AgendaId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM agendas WHERE id = $1")
            .bind(agenda_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check agenda existence: {}", e),
                )
            })?;

        Ok(result.0 > 0)
    }
}

#[async_trait]
impl VoterRegistry for PostgresDirectory {
    async fn is_eligible(&self, voter_id: &VoterId) -> Result<bool, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM voters WHERE id = $1 AND active = TRUE")
                .bind(voter_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check voter eligibility: {}", e),
                    )
                })?;

        Ok(result.0 > 0)
    }
}
