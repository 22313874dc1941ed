//! Tally module - derived vote counts and outcome.
//!
//! A tally is computed on demand from the vote ledger and never stored.
//! Votes are immutable once written, so counts are stable snapshots as of
//! the read.

mod errors;

pub use errors::TallyError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw yes/no counts scanned from the ledger for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotCounts {
    pub yes: u64,
    pub no: u64,
}

impl BallotCounts {
    /// Creates counts from raw totals.
    pub fn new(yes: u64, no: u64) -> Self {
        Self { yes, no }
    }
}

/// Outcome label derived from the counts.
///
/// Strict greater-than on both sides; there is no quorum rule and no other
/// tie-break, so a session with zero votes ties 0-0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Approved,
    Rejected,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Approved => "APPROVED",
            Outcome::Rejected => "REJECTED",
            Outcome::Tie => "TIE",
        };
        write!(f, "{}", s)
    }
}

/// Vote counts and derived outcome for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: u64,
    pub no: u64,
    pub total: u64,
    pub outcome: Outcome,
}

impl Tally {
    /// Computes the tally from scanned counts.
    pub fn from_counts(counts: BallotCounts) -> Self {
        let outcome = if counts.yes > counts.no {
            Outcome::Approved
        } else if counts.no > counts.yes {
            Outcome::Rejected
        } else {
            Outcome::Tie
        };

        Self {
            yes: counts.yes,
            no: counts.no,
            total: counts.yes + counts.no,
            outcome,
        }
    }
}
