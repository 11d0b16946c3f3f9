//! Request-level fault injection.
//!
//! Decides, per request, whether a configured fault fires and applies it.
//! The crate has no HTTP framework dependency; the presentation layer adapts
//! [`Fault`] into a tower middleware.
//!
//! # Overview
//!
//! - [`Injector`]: the fault strategy (error status or added latency)
//! - [`ParticipationSampler`]: per-request probability draw
//! - [`PathFilter`]: exact paths that are never faulted
//! - [`FaultConfig`]: validated, immutable configuration
//! - [`Fault`]: combines the above into a per-request [`Decision`]
//!
//! # Example
//!
//! ```ignore
//! use fault::{Fault, FaultConfig, Injector};
//!
//! let injector = Injector::error(503)?;
//! let config = FaultConfig::new(injector, true, 0.25, ["/health"])?;
//! let fault = Fault::new(config);
//!
//! if fault.decide("/data").is_faulted() {
//!     // apply fault.injector()
//! }
//! ```

mod error;
mod fault_config;
mod fault_policy;
mod injector;
mod path_filter;
mod sampler;

pub use error::FaultError;
pub use fault_config::FaultConfig;
pub use fault_policy::{Decision, Fault};
pub use injector::{ErrorInjector, Injector, InjectorKind, InjectorOutcome, SlowInjector};
pub use path_filter::{DEFAULT_BLOCKED_PATHS, PathFilter};
pub use sampler::{FixedSampler, ParticipationSampler, RandomSampler};
