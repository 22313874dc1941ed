//! Voter registry port.
//!
//! Voter identity and eligibility are owned by an external collaborator
//! (identity-document verification in the deployed system). The check is
//! deterministic: the same voter yields the same answer until their
//! registration changes.

use crate::domain::foundation::{DomainError, VoterId};
use async_trait::async_trait;

/// Eligibility lookup against the externally-owned voter registry.
#[async_trait]
pub trait VoterRegistry: Send + Sync {
    /// Returns true if the voter is known and currently eligible to vote.
    async fn is_eligible(&self, voter_id: &VoterId) -> Result<bool, DomainError>;
}
