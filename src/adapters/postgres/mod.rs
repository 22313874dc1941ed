//! PostgreSQL adapters.
//!
//! Implementations of the storage ports backed by PostgreSQL via sqlx.
//! The database carries the two guarantees the handlers rely on: the
//! conditional `UPDATE ... WHERE status = ...` for lifecycle transitions
//! and the unique (session_id, voter_id) index for one-voter-one-vote.

mod directory;
mod session_store;
mod vote_ledger;

pub use directory::PostgresDirectory;
pub use session_store::PostgresSessionStore;
pub use vote_ledger::PostgresVoteLedger;
