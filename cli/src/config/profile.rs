use serde::{Deserialize, Serialize};

use super::PAPERRAG_API_ENDPOINT;

/// Per-environment connection settings. Every field is optional so a
/// profile only has to spell out what differs from the `all` profile.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ProfileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ProfileConfig {
    pub(crate) fn with_api_endpoint(endpoint: &str) -> Self {
        ProfileConfig {
            api_endpoint: Some(endpoint.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn default_profile() -> Self {
        Self::with_api_endpoint(PAPERRAG_API_ENDPOINT)
    }

    /// Field-wise merge with the `all` profile: this profile wins.
    pub(crate) fn merge(self, fallback: Option<&ProfileConfig>) -> ProfileConfig {
        let Some(fallback) = fallback else {
            return self;
        };
        ProfileConfig {
            api_endpoint: self.api_endpoint.or_else(|| fallback.api_endpoint.clone()),
            poll_interval_secs: self.poll_interval_secs.or(fallback.poll_interval_secs),
            request_timeout_secs: self
                .request_timeout_secs
                .or(fallback.request_timeout_secs),
        }
    }
}
