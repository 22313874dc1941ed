//! In-memory agenda directory and voter registry.
//!
//! Stand-in for the external agenda/voter collaborators in tests and local
//! development. Entries can be deactivated to model soft-deleted records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AgendaId, DomainError, VoterId};
use crate::ports::{AgendaDirectory, VoterRegistry};

/// In-memory registry of known agendas and voters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    agendas: Arc<RwLock<HashMap<AgendaId, bool>>>,
    voters: Arc<RwLock<HashMap<VoterId, bool>>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an active agenda.
    pub async fn add_agenda(&self, agenda_id: AgendaId) {
        self.agendas.write().await.insert(agenda_id, true);
    }

    /// Registers an eligible voter.
    pub async fn add_voter(&self, voter_id: VoterId) {
        self.voters.write().await.insert(voter_id, true);
    }

    /// Marks a voter ineligible without forgetting them.
    pub async fn deactivate_voter(&self, voter_id: &VoterId) {
        if let Some(active) = self.voters.write().await.get_mut(voter_id) {
            *active = false;
        }
    }
}

#[async_trait]
impl AgendaDirectory for InMemoryDirectory {
    async fn agenda_exists(&self, agenda_id: &AgendaId) -> Result<bool, DomainError> {
        Ok(self
            .agendas
            .read()
            .await
            .get(agenda_id)
            .copied()
            .unwrap_or(false))
    }
}

#[async_trait]
impl VoterRegistry for InMemoryDirectory {
    async fn is_eligible(&self, voter_id: &VoterId) -> Result<bool, DomainError> {
        Ok(self
            .voters
            .read()
            .await
            .get(voter_id)
            .copied()
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn unknown_agenda_does_not_exist() {
        let directory = InMemoryDirectory::new();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        assert!(!directory.agenda_exists(&agenda).await.unwrap());
    }

    #[tokio::test]
    async fn registered_agenda_exists() {
        let directory = InMemoryDirectory::new();
        let agenda = AgendaId::from_uuid(Uuid::new_v4());
        directory.add_agenda(agenda).await;
        assert!(directory.agenda_exists(&agenda).await.unwrap());
    }

    #[tokio::test]
    async fn deactivated_voter_is_not_eligible() {
        let directory = InMemoryDirectory::new();
        let voter = VoterId::from_uuid(Uuid::new_v4());

        directory.add_voter(voter).await;
        assert!(directory.is_eligible(&voter).await.unwrap());

        directory.deactivate_voter(&voter).await;
        assert!(!directory.is_eligible(&voter).await.unwrap());
    }
}
