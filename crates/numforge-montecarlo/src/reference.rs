//! Reference value for `∫ x² dx`.
//!
//! The reference is chosen at call time: numerical quadrature is tried
//! first and the closed form `(b³ − a³)/3` is used when quadrature is
//! unavailable or fails. The method that produced the value travels with it.

use std::fmt;

use numforge_config::ReferenceStrategy;
use tracing::debug;

use crate::integrand::{exact_integral, square};
use crate::quadrature::{integrate, QuadratureOptions};

/// How a reference value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMethod {
    /// Adaptive 15-point Gauss–Kronrod quadrature.
    GaussKronrod,
    /// Closed-form antiderivative.
    Analytic,
}

impl ReferenceMethod {
    pub fn name(self) -> &'static str {
        match self {
            ReferenceMethod::GaussKronrod => "gauss-kronrod-15",
            ReferenceMethod::Analytic => "analytic",
        }
    }
}

impl fmt::Display for ReferenceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reference value and the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub value: f64,
    pub method: ReferenceMethod,
}

impl Reference {
    fn analytic(a: f64, b: f64) -> Self {
        Self {
            value: exact_integral(a, b),
            method: ReferenceMethod::Analytic,
        }
    }
}

/// Computes the reference for `∫ₐᵇ x² dx`, preferring quadrature.
///
/// # Example
///
/// ```
/// use numforge_montecarlo::{reference, ReferenceMethod};
///
/// let r = reference(0.0, 2.0);
/// assert_eq!(r.method, ReferenceMethod::GaussKronrod);
/// assert!((r.value - 8.0 / 3.0).abs() < 1e-14);
/// ```
pub fn reference(a: f64, b: f64) -> Reference {
    reference_with(a, b, ReferenceStrategy::Auto)
}

/// Computes the reference using `strategy`.
///
/// Quadrature failures are never fatal; they fall back to the closed form.
pub fn reference_with(a: f64, b: f64, strategy: ReferenceStrategy) -> Reference {
    match strategy {
        ReferenceStrategy::Analytic => Reference::analytic(a, b),
        ReferenceStrategy::Auto => match integrate(square, a, b, &QuadratureOptions::default()) {
            Ok(q) => Reference {
                value: q.value,
                method: ReferenceMethod::GaussKronrod,
            },
            Err(err) => {
                debug!(%err, a, b, "Quadrature failed, using closed form");
                Reference::analytic(a, b)
            }
        },
    }
}
