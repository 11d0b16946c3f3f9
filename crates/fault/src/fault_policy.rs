//! Per-request fault decisions.

use std::{fmt, sync::Arc};

use tracing::debug;

use crate::{FaultConfig, Injector, ParticipationSampler, RandomSampler};

/// Outcome of evaluating one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Fault injection is switched off
    Disabled,
    /// The path is on the blocklist
    Blocked,
    /// The request was not sampled
    PassThrough,
    /// The injector must run
    Faulted,
}

impl Decision {
    /// Whether the injector must run for this request
    #[must_use]
    pub const fn is_faulted(self) -> bool {
        matches!(self, Self::Faulted)
    }

    /// Label used in log events
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Blocked => "blocked",
            Self::PassThrough => "passthrough",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fault injection policy shared by every request.
///
/// Cloning is cheap; the configuration and sampler are behind an `Arc` and
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct Fault {
    config: Arc<FaultConfig>,
    sampler: Arc<dyn ParticipationSampler>,
}

impl Fault {
    /// Create a policy that samples with [`RandomSampler`]
    #[must_use]
    pub fn new(config: FaultConfig) -> Self {
        Self::with_sampler(config, Arc::new(RandomSampler))
    }

    /// Create a policy with a custom sampler
    #[must_use]
    pub fn with_sampler(config: FaultConfig, sampler: Arc<dyn ParticipationSampler>) -> Self {
        Self {
            config: Arc::new(config),
            sampler,
        }
    }

    /// Decide what happens to a request for `path`.
    ///
    /// Checks run in order: master switch, blocklist, sampling. Only the
    /// last one consumes randomness.
    pub fn decide(&self, path: &str) -> Decision {
        let decision = if !self.config.enabled() {
            Decision::Disabled
        } else if self.config.blocked_paths().is_blocked(path) {
            Decision::Blocked
        } else if self.sampler.should_fault(self.config.participation()) {
            Decision::Faulted
        } else {
            Decision::PassThrough
        };

        debug!(path = %path, decision = %decision, "Fault decision");
        decision
    }

    /// Fault applied to selected requests
    #[must_use]
    pub fn injector(&self) -> &Injector {
        self.config.injector()
    }

    /// Underlying configuration
    #[must_use]
    pub fn config(&self) -> &FaultConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::FixedSampler;

    #[derive(Debug, Default)]
    struct CountingSampler {
        calls: AtomicUsize,
    }

    impl ParticipationSampler for CountingSampler {
        fn should_fault(&self, _participation: f64) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            true
        }
    }

    fn config(enabled: bool, participation: f64) -> FaultConfig {
        FaultConfig::new(Injector::error(500).unwrap(), enabled, participation, ["/health"])
            .unwrap()
    }

    #[test]
    fn disabled_short_circuits_before_sampling() {
        let sampler = Arc::new(CountingSampler::default());
        let fault = Fault::with_sampler(config(false, 1.0), sampler.clone());

        assert_eq!(fault.decide("/data"), Decision::Disabled);
        assert_eq!(fault.decide("/health"), Decision::Disabled);
        assert_eq!(sampler.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn blocked_path_skips_sampling() {
        let sampler = Arc::new(CountingSampler::default());
        let fault = Fault::with_sampler(config(true, 1.0), sampler.clone());

        assert_eq!(fault.decide("/health"), Decision::Blocked);
        assert_eq!(sampler.calls.load(Ordering::Relaxed), 0);

        assert_eq!(fault.decide("/data"), Decision::Faulted);
        assert_eq!(sampler.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn unsampled_request_passes_through() {
        let fault = Fault::with_sampler(config(true, 0.5), Arc::new(FixedSampler(false)));
        assert_eq!(fault.decide("/data"), Decision::PassThrough);
    }

    #[test]
    fn participation_boundaries_with_random_sampler() {
        let never = Fault::new(config(true, 0.0));
        assert!((0..1_000).all(|_| never.decide("/data") == Decision::PassThrough));

        let always = Fault::new(config(true, 1.0));
        assert!((0..1_000).all(|_| always.decide("/data") == Decision::Faulted));
    }

    #[test]
    fn decision_labels() {
        assert_eq!(Decision::Disabled.to_string(), "disabled");
        assert_eq!(Decision::Blocked.to_string(), "blocked");
        assert_eq!(Decision::PassThrough.to_string(), "passthrough");
        assert_eq!(Decision::Faulted.to_string(), "faulted");
        assert!(Decision::Faulted.is_faulted());
        assert!(!Decision::Blocked.is_faulted());
    }

    #[test]
    fn clones_share_configuration() {
        let fault = Fault::new(config(true, 0.3));
        let clone = fault.clone();
        assert!(std::ptr::eq(fault.config(), clone.config()));
        assert_eq!(clone.injector(), &Injector::error(500).unwrap());
    }
}
