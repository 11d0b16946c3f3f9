//! Application state shared across handlers

use std::{sync::Arc, time::Duration};

use infrastructure::MicroserviceConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the external microservice
    pub http_client: reqwest::Client,
    /// External microservice endpoint
    pub microservice_url: Arc<str>,
}

impl AppState {
    /// Build state from the microservice settings
    pub fn new(config: &MicroserviceConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            microservice_url: Arc::from(config.url.as_str()),
        })
    }
}
