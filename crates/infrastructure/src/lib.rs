//! Infrastructure layer - configuration and logging
//!
//! Turns files, environment variables, and flags into validated settings and
//! sets up the global tracing subscriber.

pub mod config;
pub mod telemetry;

pub use self::config::{AppConfig, FaultAppConfig, LogFormat, MicroserviceConfig, ServerConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_logging};
