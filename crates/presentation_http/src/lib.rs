//! Faulty HTTP presentation layer
//!
//! This crate provides the HTTP service and the fault injection middleware.

pub mod cli;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use error::ApiError;
pub use middleware::{FaultLayer, FaultService, RequestCancellation};
pub use routes::{create_app, create_router};
pub use state::AppState;
