//! Identity service adapters.
//!
//! Remote implementation of VoterRegistry for deployments where voter
//! eligibility lives in an external identity service rather than the
//! local database.

mod http_verifier;

pub use http_verifier::{HttpIdentityVerifier, IdentityVerifierConfig};
