//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `fault_injection`: Fault injection settings
//! - `microservice`: External service called by the demo route
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `faulty.{toml,yaml,json}` file (or an explicit path), then `FAULTY_*`
//! environment variables using `__` between nested keys, for example
//! `FAULTY_FAULT__PARTICIPATION=0.25`.

mod fault_injection;
mod microservice;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

pub use fault_injection::FaultAppConfig;
pub use microservice::MicroserviceConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FAULTY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Fault injection configuration
    #[serde(default)]
    pub fault: FaultAppConfig,

    /// External microservice configuration
    #[serde(default)]
    pub microservice: MicroserviceConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file.
    ///
    /// With `path` set the file is required; otherwise `faulty.*` in the
    /// working directory is read if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_from(path, None)
    }

    /// Same as [`AppConfig::load`], reading overrides from `env` instead of
    /// the process environment when it is given.
    fn load_from(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("faulty").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., FAULTY_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("fault.blocked_paths")
                    .try_parsing(true)
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }
}
