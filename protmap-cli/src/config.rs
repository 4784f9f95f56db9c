//! Configuration module
//!
//! Handles CLI configuration including the mapping service URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ID-mapping service
    pub base_url: String,
}
