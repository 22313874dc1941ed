//! Agenda directory port.
//!
//! Agenda management is an external collaborator; the core only ever asks
//! whether an agenda exists and is active.

use crate::domain::foundation::{AgendaId, DomainError};
use async_trait::async_trait;

/// Lookup into the externally-owned agenda catalogue.
#[async_trait]
pub trait AgendaDirectory: Send + Sync {
    /// Returns true if the agenda exists and is active.
    async fn agenda_exists(&self, agenda_id: &AgendaId) -> Result<bool, DomainError>;
}
