//! Participation sampling.

use std::fmt::Debug;

use rand::Rng;

/// Decides whether an eligible request takes part in fault injection
pub trait ParticipationSampler: Send + Sync + Debug {
    /// Return `true` if the request should be faulted
    fn should_fault(&self, participation: f64) -> bool;
}

/// Uniform random sampler backed by the thread-local generator.
///
/// Every call is an independent draw in `[0, 1)`. Each worker thread owns its
/// own generator, so concurrent requests never contend on a shared lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl ParticipationSampler for RandomSampler {
    fn should_fault(&self, participation: f64) -> bool {
        if participation <= 0.0 {
            return false;
        }
        if participation >= 1.0 {
            return true;
        }
        rand::rng().random::<f64>() < participation
    }
}

/// Sampler that ignores participation and always answers the same
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub bool);

impl ParticipationSampler for FixedSampler {
    fn should_fault(&self, _participation: f64) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn zero_participation_never_faults() {
        let sampler = RandomSampler;
        assert!((0..10_000).all(|_| !sampler.should_fault(0.0)));
    }

    #[test]
    fn full_participation_always_faults() {
        let sampler = RandomSampler;
        assert!((0..10_000).all(|_| sampler.should_fault(1.0)));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn observed_rate_tracks_participation() {
        let sampler = RandomSampler;
        let samples = 100_000;
        for participation in [0.1, 0.5, 0.9] {
            let hits = (0..samples)
                .filter(|_| sampler.should_fault(participation))
                .count();
            let rate = hits as f64 / f64::from(samples);
            assert!(
                (rate - participation).abs() < 0.02,
                "participation {participation}, observed {rate}"
            );
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn concurrent_draws_stay_uniform() {
        let sampler: Arc<dyn ParticipationSampler> = Arc::new(RandomSampler);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sampler = Arc::clone(&sampler);
                thread::spawn(move || (0..20_000).filter(|_| sampler.should_fault(0.3)).count())
            })
            .collect();

        let hits: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let rate = hits as f64 / 160_000.0;
        assert!((rate - 0.3).abs() < 0.02, "observed {rate}");
    }

    #[test]
    fn fixed_sampler_ignores_participation() {
        assert!(FixedSampler(true).should_fault(0.0));
        assert!(!FixedSampler(false).should_fault(1.0));
    }
}
