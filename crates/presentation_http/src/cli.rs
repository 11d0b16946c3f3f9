//! Command-line flags
//!
//! Flags override values from the configuration file and environment.

use std::path::PathBuf;

use clap::Parser;
use fault::InjectorKind;
use infrastructure::AppConfig;

/// Faulty HTTP service
#[derive(Debug, Parser)]
#[command(name = "faulty")]
#[command(author, version, about = "HTTP service with request-level fault injection", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, env = "FAULTY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Microservice endpoint
    #[arg(long)]
    pub microservice: Option<String>,

    /// Activate faults (`--faults=false` switches them off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub faults: Option<bool>,

    /// Fraction of requests to fault (0.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub percent: Option<f64>,

    /// Fault type: error or slowness
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<InjectorKind>,

    /// Latency in milliseconds added by the slowness fault
    #[arg(long, allow_negative_numbers = true)]
    pub latency: Option<i64>,

    /// Status code returned by the error fault
    #[arg(long)]
    pub status: Option<u16>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.microservice {
            config.microservice.url.clone_from(url);
        }
        if let Some(enabled) = self.faults {
            config.fault.enabled = enabled;
        }
        if let Some(percent) = self.percent {
            config.fault.participation = percent;
        }
        if let Some(kind) = self.kind {
            config.fault.kind = kind;
        }
        if let Some(latency) = self.latency {
            config.fault.latency_ms = latency;
        }
        if let Some(status) = self.status {
            config.fault.status_code = status;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
