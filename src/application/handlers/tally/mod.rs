//! Result aggregation handler.

mod get_tally;

pub use get_tally::{GetTallyHandler, GetTallyQuery};
