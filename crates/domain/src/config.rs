//! Application configuration structures

use serde::{Deserialize, Serialize};

/// Default remote collection endpoint.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote users collection settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Settings for the remote users collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the REST service (the `/users` collection lives under it)
    pub base_url: String,
    /// Optional request timeout in seconds. `None` leaves the transport
    /// default in place; nothing in the application sets one.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Optional User-Agent header for outbound requests
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_seconds: None, user_agent: None }
    }
}
