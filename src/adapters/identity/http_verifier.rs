//! HTTP Identity Verifier - remote implementation of VoterRegistry.
//!
//! Asks an external identity service whether a voter may vote. The service
//! answers `GET {base_url}/voters/{id}/eligibility` with a JSON body of
//! `{"status": "ABLE_TO_VOTE"}` or `{"status": "UNABLE_TO_VOTE"}`; an HTTP
//! 404 means the voter is unknown and maps to ineligible.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, VoterId};
use crate::ports::VoterRegistry;

/// Configuration for the identity verifier.
#[derive(Debug, Clone)]
pub struct IdentityVerifierConfig {
    /// Base URL of the identity service.
    pub base_url: String,
    /// API key for authentication.
    api_key: Secret<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl IdentityVerifierConfig {
    /// Creates a new configuration with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Secret::new(api_key.into()),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, Deserialize)]
struct EligibilityResponse {
    status: String,
}

const ABLE_TO_VOTE: &str = "ABLE_TO_VOTE";

/// VoterRegistry backed by a remote identity service.
pub struct HttpIdentityVerifier {
    config: IdentityVerifierConfig,
    client: Client,
}

impl HttpIdentityVerifier {
    /// Creates a new verifier with the given configuration.
    pub fn new(config: IdentityVerifierConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    fn eligibility_url(&self, voter_id: &VoterId) -> String {
        format!("{}/voters/{}/eligibility", self.config.base_url, voter_id)
    }
}

#[async_trait]
impl VoterRegistry for HttpIdentityVerifier {
    async fn is_eligible(&self, voter_id: &VoterId) -> Result<bool, DomainError> {
        let response = self
            .client
            .get(self.eligibility_url(voter_id))
            .header("x-api-key", self.config.api_key())
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Identity service request failed: {}", e),
                )
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if !response.status().is_success() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!(
                    "Identity service returned status {}",
                    response.status()
                ),
            ));
        }

        let body: EligibilityResponse = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Invalid identity service response: {}", e),
            )
        })?;

        Ok(body.status == ABLE_TO_VOTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn eligibility_url_includes_voter_id() {
        let voter_id = VoterId::from_uuid(Uuid::new_v4());
        let verifier = HttpIdentityVerifier::new(IdentityVerifierConfig::new(
            "http://identity.local",
            "test-key",
        ))
        .unwrap();

        assert_eq!(
            verifier.eligibility_url(&voter_id),
            format!("http://identity.local/voters/{}/eligibility", voter_id)
        );
    }

    #[test]
    fn config_hides_api_key_in_debug_output() {
        let config = IdentityVerifierConfig::new("http://identity.local", "super-secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
    }
}
