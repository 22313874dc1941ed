//! In-memory adapters.
//!
//! Honor the same atomicity contracts as the PostgreSQL adapters and back
//! the integration tests and local development.

mod directory;
mod session_store;
mod vote_ledger;

pub use directory::InMemoryDirectory;
pub use session_store::InMemorySessionStore;
pub use vote_ledger::InMemoryVoteLedger;
