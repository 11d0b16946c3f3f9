//! Authorization demo endpoint

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use tracing::info;

/// Response body of `/authz`
pub const AUTHZ_BODY: &str = "Security!";

/// Answer with a fixed body and log who asked
pub async fn authz(req: Request) -> &'static str {
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |ConnectInfo(addr)| addr.to_string());

    info!(
        remote_addr = %remote_addr,
        method = %req.method(),
        uri = %req.uri(),
        "Authz request"
    );

    AUTHZ_BODY
}
