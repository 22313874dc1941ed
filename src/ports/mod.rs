//! Ports - Interfaces between the domain and external systems.
//!
//! Ports define contracts; adapters implement them.

mod agenda_directory;
mod clock;
mod session_store;
mod vote_ledger;
mod voter_registry;

pub use agenda_directory::AgendaDirectory;
pub use clock::Clock;
pub use session_store::SessionStore;
pub use vote_ledger::VoteLedger;
pub use voter_registry::VoterRegistry;
