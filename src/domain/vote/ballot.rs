//! Ballot value - the yes/no choice a voter casts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value of a cast vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ballot {
    Yes,
    No,
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ballot::Yes => "YES",
            Ballot::No => "NO",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Ballot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YES" | "yes" => Ok(Ballot::Yes),
            "NO" | "no" => Ok(Ballot::No),
            other => Err(format!("unknown ballot value: {}", other)),
        }
    }
}
