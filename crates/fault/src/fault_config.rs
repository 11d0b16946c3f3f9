//! Validated fault configuration.

use crate::{FaultError, Injector, PathFilter};

/// Immutable configuration consumed by [`crate::Fault`]
#[derive(Debug, Clone, PartialEq)]
pub struct FaultConfig {
    enabled: bool,
    participation: f64,
    blocked_paths: PathFilter,
    injector: Injector,
}

impl FaultConfig {
    /// Create a configuration.
    ///
    /// `participation` must lie in `[0, 1]`; values outside that range (and
    /// NaN) are rejected rather than clamped. `blocked_paths` is used as
    /// given; see [`PathFilter::with_defaults`] for the health-check defaults.
    pub fn new<I, P>(
        injector: Injector,
        enabled: bool,
        participation: f64,
        blocked_paths: I,
    ) -> Result<Self, FaultError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::with_filter(injector, enabled, participation, PathFilter::new(blocked_paths))
    }

    /// Create a configuration from an already built [`PathFilter`]
    pub fn with_filter(
        injector: Injector,
        enabled: bool,
        participation: f64,
        blocked_paths: PathFilter,
    ) -> Result<Self, FaultError> {
        if !(0.0..=1.0).contains(&participation) {
            return Err(FaultError::invalid(format!(
                "participation {participation} is outside [0, 1]"
            )));
        }

        Ok(Self {
            enabled,
            participation,
            blocked_paths,
            injector,
        })
    }

    /// Master switch
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Probability that an eligible request is faulted
    #[must_use]
    pub const fn participation(&self) -> f64 {
        self.participation
    }

    /// Paths that are never faulted
    #[must_use]
    pub const fn blocked_paths(&self) -> &PathFilter {
        &self.blocked_paths
    }

    /// Fault applied to selected requests
    #[must_use]
    pub const fn injector(&self) -> &Injector {
        &self.injector
    }
}
