//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber. Exporting spans to a trace
//! collector is left to the hosting process.

mod logging;

pub use logging::{TelemetryConfig, TelemetryError, init_logging};
