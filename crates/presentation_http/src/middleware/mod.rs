//! HTTP middleware components
//!
//! This module contains the fault injection layer that wraps the router.

pub mod fault_injection;

pub use fault_injection::{FaultLayer, FaultService, RequestCancellation};
