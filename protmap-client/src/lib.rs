//! Protmap HTTP Client
//!
//! A type-safe client for the asynchronous ID-mapping REST workflow:
//! submit a mapping job, poll its status until it is terminal, fetch its
//! results.
//!
//! # Example
//!
//! ```no_run
//! use protmap_client::IdMappingClient;
//! use protmap_core::domain::mapping::MappingRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = IdMappingClient::new("https://rest.uniprot.org");
//!
//!     let request = MappingRequest::new("WP_001338221.1");
//!     let accessions = client.resolve(&request).await?;
//!
//!     println!("UniProt IDs: {}", accessions.join(", "));
//!     Ok(())
//! }
//! ```

pub mod error;
mod idmapping;
mod poll;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use idmapping::{IdMappingService, await_completion_with, resolve_with};
pub use poll::{Backoff, PollPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the ID-mapping service
///
/// One instance drives the full job workflow:
/// - job submission (`submit_job`)
/// - status polling (`job_status`, `await_completion`)
/// - result retrieval (`fetch_results`)
/// - the combined `resolve` orchestration
///
/// The base URL and the polling policy are injected at construction; the
/// client holds no other state, and each `resolve` call runs one
/// independent workflow with its own job handle.
#[derive(Debug, Clone)]
pub struct IdMappingClient {
    /// Base URL of the mapping service (e.g. "https://rest.uniprot.org")
    base_url: String,
    /// HTTP client instance
    http: Client,
    /// Polling behavior for `await_completion`
    poll: PollPolicy,
}

impl IdMappingClient {
    /// Create a new mapping client with the default polling policy
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the mapping service
    ///
    /// # Example
    /// ```
    /// use protmap_client::IdMappingClient;
    ///
    /// let client = IdMappingClient::new("https://rest.uniprot.org");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new mapping client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use protmap_client::IdMappingClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = IdMappingClient::with_client("https://rest.uniprot.org", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: client,
            poll: PollPolicy::default(),
        }
    }

    /// Replace the polling policy used by `await_completion` and `resolve`
    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    /// Get the base URL of the mapping service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured polling policy
    pub fn poll_policy(&self) -> &PollPolicy {
        &self.poll
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle a service response and deserialize JSON
    ///
    /// Non-success status codes become `ClientError::Api`; bodies that do
    /// not match the expected schema become `ClientError::Protocol`.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle a service response as raw JSON
    ///
    /// Used by the status call, where the raw payload must stay available
    /// for failure diagnostics before schema validation.
    async fn handle_raw_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("Response body is not JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = IdMappingClient::new("https://rest.uniprot.org");
        assert_eq!(client.base_url(), "https://rest.uniprot.org");
        assert_eq!(client.poll_policy(), &PollPolicy::default());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = IdMappingClient::new("https://rest.uniprot.org/");
        assert_eq!(client.base_url(), "https://rest.uniprot.org");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = IdMappingClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_poll_policy() {
        let policy = PollPolicy::fixed(Duration::from_millis(100), 3);
        let client = IdMappingClient::new("http://localhost:8080").with_poll_policy(policy.clone());
        assert_eq!(client.poll_policy(), &policy);
    }
}
