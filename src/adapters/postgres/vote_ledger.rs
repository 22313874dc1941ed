//! PostgreSQL implementation of VoteLedger.
//!
//! One-voter-one-vote is enforced by the unique (session_id, voter_id)
//! index on the votes table. `INSERT ... ON CONFLICT DO NOTHING` turns a
//! duplicate into zero affected rows, so racing submissions for the same
//! pair resolve inside PostgreSQL.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, VoterId};
use crate::domain::tally::BallotCounts;
use crate::domain::vote::{Ballot, Vote};
use crate::ports::VoteLedger;

/// PostgreSQL implementation of VoteLedger.
#[derive(Clone)]
pub struct PostgresVoteLedger {
    pool: PgPool,
}

impl PostgresVoteLedger {
    /// Creates a new PostgresVoteLedger.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteLedger for PostgresVoteLedger {
    async fn insert(&self, vote: &Vote) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO votes (id, session_id, voter_id, ballot, cast_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (session_id, voter_id) DO NOTHING
            "#,
        )
        .bind(vote.id().as_uuid())
        .bind(vote.session_id().as_uuid())
        .bind(vote.voter_id().as_uuid())
        .bind(ballot_to_str(vote.ballot()))
        .bind(vote.cast_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert vote: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn has_voted(
        &self,
        session_id: &SessionId,
        voter_id: &VoterId,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM votes WHERE session_id = $1 AND voter_id = $2",
        )
        .bind(session_id.as_uuid())
        .bind(voter_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check existing vote: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn count_ballots(&self, session_id: &SessionId) -> Result<BallotCounts, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT ballot, COUNT(*) as count
            FROM votes
            WHERE session_id = $1
            GROUP BY ballot
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count ballots: {}", e),
            )
        })?;

        let mut counts = BallotCounts::default();
        for row in rows {
            let ballot_str: String = row.try_get("ballot").map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to get ballot: {}", e),
                )
            })?;
            let count: i64 = row.try_get("count").map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to get count: {}", e),
                )
            })?;

            match str_to_ballot(&ballot_str)? {
                Ballot::Yes => counts.yes = count as u64,
                Ballot::No => counts.no = count as u64,
            }
        }

        Ok(counts)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn ballot_to_str(ballot: Ballot) -> &'static str {
    match ballot {
        Ballot::Yes => "yes",
        Ballot::No => "no",
    }
}

fn str_to_ballot(s: &str) -> Result<Ballot, DomainError> {
    match s {
        "yes" => Ok(Ballot::Yes),
        "no" => Ok(Ballot::No),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid ballot: {}", s),
        )),
    }
}
