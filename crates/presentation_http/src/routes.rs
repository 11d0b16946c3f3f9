//! Route definitions

use std::time::Duration;

use axum::{Router, routing::get};
use fault::Fault;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{handlers, middleware::FaultLayer, state::AppState};

/// Create the router with all routes and no middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints, exempt from faults by default
        .route("/health", get(handlers::health::health_check))
        .route("/ping", get(handlers::health::health_check))
        // Demo endpoints
        .route("/authz", get(handlers::authz::authz))
        .route("/microservice", get(handlers::microservice::microservice))
        // Unknown paths still go through the middleware
        .fallback(handlers::not_found)
        // Attach state
        .with_state(state)
}

/// Create the served application: routes wrapped in fault injection, a
/// request deadline, and request tracing (outermost last)
pub fn create_app(state: AppState, fault: Fault, request_timeout: Duration) -> Router {
    create_router(state)
        .layer(FaultLayer::new(fault))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
