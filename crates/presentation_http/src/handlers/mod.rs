//! HTTP request handlers

pub mod authz;
pub mod health;
pub mod microservice;

use axum::http::StatusCode;

/// Fallback for unrouted paths
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
