//! Vote module - immutable ballots recorded against a session.

mod ballot;
mod errors;
mod record;

pub use ballot::Ballot;
pub use errors::VoteError;
pub use record::Vote;
