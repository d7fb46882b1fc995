pub mod client;
pub mod models;

pub use client::Client;

#[cfg(test)]
mod tests;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3000";

/// Connection settings for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_endpoint: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            request_timeout_secs: 120,
        }
    }
}
