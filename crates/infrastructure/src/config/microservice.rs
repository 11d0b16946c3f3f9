//! External microservice settings.

use serde::{Deserialize, Serialize};

/// Upstream service called by the `/microservice` route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroserviceConfig {
    /// Endpoint URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "http://www.google.com".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for MicroserviceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}
