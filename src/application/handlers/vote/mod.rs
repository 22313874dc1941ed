//! Vote handlers: admission and has-voted lookup.

mod cast_vote;
mod has_voted;

pub use cast_vote::{CastVoteCommand, CastVoteHandler};
pub use has_voted::{HasVotedHandler, HasVotedQuery};
