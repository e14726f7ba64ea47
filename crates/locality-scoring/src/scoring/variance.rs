use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the bounded jitter applied to each composed score.
pub trait VarianceSource: Send {
    /// Uniform sample in `[-max_variance, max_variance]`.
    fn jitter(&mut self, max_variance: f64) -> f64;
}

/// Uniform jitter backed by a [`StdRng`].
pub struct RandomVariance {
    rng: StdRng,
}

impl RandomVariance {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomVariance {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl VarianceSource for RandomVariance {
    fn jitter(&mut self, max_variance: f64) -> f64 {
        let bound = max_variance.abs();
        if bound == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-bound..=bound)
    }
}

/// Disables jitter entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVariance;

impl VarianceSource for NoVariance {
    fn jitter(&mut self, _max_variance: f64) -> f64 {
        0.0
    }
}
