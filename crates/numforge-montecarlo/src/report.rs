//! Estimate versus reference comparison.

use numforge_config::{EstimatorConfig, ReferenceStrategy};
use tracing::debug;

use crate::estimator::{EstimateError, MonteCarloEstimator};
use crate::interval::Interval;
use crate::reference::{reference_with, Reference};

/// Everything a single estimation run produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralReport {
    pub interval: Interval,
    pub samples: u64,
    pub seed: Option<u64>,
    /// Monte Carlo estimate.
    pub estimate: f64,
    /// Independent reference and how it was obtained.
    pub reference: Reference,
    /// `|estimate − reference|`.
    pub absolute_error: f64,
    /// Standard error of the estimate; `None` below two samples.
    pub standard_error: Option<f64>,
}

/// Estimates `∫ₐᵇ x² dx` and compares it with the reference.
///
/// Sampling error is part of the answer: there is no retry when the
/// estimate lands far from the reference.
///
/// # Example
///
/// ```
/// use numforge_montecarlo::report;
///
/// let r = report(0.0, 2.0, 200_000, Some(42)).unwrap();
/// assert!((r.reference.value - 8.0 / 3.0).abs() < 1e-14);
/// assert!(r.absolute_error < 0.05);
/// ```
pub fn report(a: f64, b: f64, n: u64, seed: Option<u64>) -> Result<IntegralReport, EstimateError> {
    report_with(a, b, n, seed, ReferenceStrategy::Auto)
}

/// [`report`] with an explicit reference strategy.
pub fn report_with(
    a: f64,
    b: f64,
    n: u64,
    seed: Option<u64>,
    strategy: ReferenceStrategy,
) -> Result<IntegralReport, EstimateError> {
    let interval = Interval::new(a, b);
    let estimate = MonteCarloEstimator::new(n)
        .with_optional_seed(seed)
        .estimate_with_stats(interval)?;
    let reference = reference_with(a, b, strategy);
    let absolute_error = (estimate.value - reference.value).abs();

    debug!(
        interval = %interval,
        samples = n,
        estimate = estimate.value,
        reference = reference.value,
        method = reference.method.name(),
        absolute_error,
        "Integral report computed"
    );

    Ok(IntegralReport {
        interval,
        samples: n,
        seed,
        estimate: estimate.value,
        reference,
        absolute_error,
        standard_error: estimate.standard_error,
    })
}

/// Runs [`report_with`] from a loaded estimator configuration.
pub fn report_from_config(config: &EstimatorConfig) -> Result<IntegralReport, EstimateError> {
    report_with(
        config.lower,
        config.upper,
        config.samples,
        config.seed,
        config.reference,
    )
}
