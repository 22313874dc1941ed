//! Identity service configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the external identity service.
///
/// When absent, voter eligibility is checked against the local voters table
/// instead of the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity service
    pub base_url: String,

    /// API key for authentication
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl IdentityConfig {
    /// Validate identity configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidIdentityUrl);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY_API_KEY"));
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_non_http_url() {
        let config = IdentityConfig {
            base_url: "ftp://identity.local".to_string(),
            api_key: "key".to_string(),
            timeout_secs: 10,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_empty_api_key() {
        let config = IdentityConfig {
            base_url: "https://identity.local".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_accepts_sane_config() {
        let config = IdentityConfig {
            base_url: "https://identity.local".to_string(),
            api_key: "key".to_string(),
            timeout_secs: 10,
        };
        assert!(config.validate().is_ok());
    }
}
