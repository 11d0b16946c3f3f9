//! Faulty HTTP Server
//!
//! Main entry point for the HTTP server.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, init_logging};
use presentation_http::{AppState, Cli, create_app};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply(&mut config);

    init_logging(&config.telemetry, config.server.log_format)?;

    info!("Faulty v{} starting...", env!("CARGO_PKG_VERSION"));

    // Invalid fault settings must stop startup
    let fault = config
        .fault
        .build_fault()
        .context("Invalid fault configuration")?;

    info!(
        enabled = config.fault.enabled,
        participation = config.fault.participation,
        injector = %fault.injector(),
        blocked_paths = ?fault.config().blocked_paths().iter().collect::<Vec<_>>(),
        "Fault injection configured"
    );

    let request_timeout = config
        .server
        .request_timeout()
        .context("Invalid server configuration")?;

    let state = AppState::new(&config.microservice).context("Failed to build HTTP client")?;
    let app = create_app(state, fault, request_timeout);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(microservice = %config.microservice.url, "Faulty listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
