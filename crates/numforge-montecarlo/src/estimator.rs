//! Mean-value Monte Carlo estimator.
//!
//! `∫ₐᵇ f(x) dx = (b − a) · E[f(U)]` for `U ~ Uniform(a, b)`, so the sample
//! mean of `f` scaled by the interval width is an unbiased estimate whose
//! variance falls as `1/n`.

use rand::distr::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use crate::integrand::square;
use crate::interval::Interval;

/// Errors raised before any sample is drawn.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("sample count must be at least 1")]
    NoSamples,

    #[error("integration bounds must be finite, got {0}")]
    NonFiniteBound(Interval),

    #[error("invalid sampling range: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}

/// A Monte Carlo estimate with its sampling statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Scaled sample mean, the integral estimate.
    pub value: f64,
    /// Estimated standard deviation of `value`; `None` below two samples.
    pub standard_error: Option<f64>,
    /// Number of samples drawn.
    pub samples: u64,
}

/// Seeded estimator for `∫ x² dx`.
///
/// Every call builds its own generator, so repeated calls with the same
/// seed reproduce the same estimate and never share a random stream.
///
/// # Example
///
/// ```
/// use numforge_montecarlo::{Interval, MonteCarloEstimator};
///
/// let estimator = MonteCarloEstimator::new(10_000).with_seed(7);
/// let first = estimator.estimate(Interval::new(0.0, 2.0)).unwrap();
/// let second = estimator.estimate(Interval::new(0.0, 2.0)).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloEstimator {
    samples: u64,
    seed: Option<u64>,
}

impl MonteCarloEstimator {
    /// Estimator drawing `samples` points from an OS-seeded generator.
    pub fn new(samples: u64) -> Self {
        Self {
            samples,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    /// Returns the integral estimate over `interval`.
    pub fn estimate(&self, interval: Interval) -> Result<f64, EstimateError> {
        self.estimate_with_stats(interval).map(|e| e.value)
    }

    /// Returns the estimate together with its standard error.
    ///
    /// A degenerate interval yields exactly `0.0` without drawing. Reversed
    /// bounds draw from `[b, a)` and scale by the negative width.
    pub fn estimate_with_stats(&self, interval: Interval) -> Result<Estimate, EstimateError> {
        if self.samples == 0 {
            return Err(EstimateError::NoSamples);
        }
        if !interval.is_finite() {
            return Err(EstimateError::NonFiniteBound(interval));
        }
        if interval.is_degenerate() {
            return Ok(Estimate {
                value: 0.0,
                standard_error: (self.samples > 1).then_some(0.0),
                samples: self.samples,
            });
        }

        let (low, high) = interval.sampling_bounds();
        let dist = Uniform::new(low, high)?;
        let mut rng = self.rng();

        // Welford running mean and sum of squared deviations.
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for i in 0..self.samples {
            let y = square(dist.sample(&mut rng));
            let delta = y - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (y - mean);
        }

        let width = interval.signed_width();
        let n = self.samples as f64;
        let standard_error =
            (self.samples > 1).then(|| width.abs() * (m2 / (n - 1.0) / n).sqrt());
        let value = width * mean;

        debug!(
            interval = %interval,
            samples = self.samples,
            seed = ?self.seed,
            estimate = value,
            standard_error = ?standard_error,
            "Monte Carlo estimate computed"
        );

        Ok(Estimate {
            value,
            standard_error,
            samples: self.samples,
        })
    }
}

/// Estimates `∫ₐᵇ x² dx` from `n` uniform samples.
///
/// `seed` makes the result reproducible; `None` seeds from the OS.
pub fn estimate(a: f64, b: f64, n: u64, seed: Option<u64>) -> Result<f64, EstimateError> {
    MonteCarloEstimator::new(n)
        .with_optional_seed(seed)
        .estimate(Interval::new(a, b))
}
