//! Numforge Monte Carlo - stochastic estimation of `∫ₐᵇ x² dx`
//!
//! This crate provides:
//! - A seeded mean-value Monte Carlo estimator
//! - Adaptive Gauss–Kronrod quadrature
//! - A reference value with closed-form fallback
//! - An estimate/reference report
//! - An SVG rendering of the integrated region

pub mod estimator;
pub mod integrand;
pub mod interval;
pub mod plot;
pub mod quadrature;
pub mod reference;
pub mod report;

pub use estimator::{estimate, Estimate, EstimateError, MonteCarloEstimator};
pub use interval::Interval;
pub use plot::{render_svg, save_plot, PlotError};
pub use quadrature::{Quadrature, QuadratureError, QuadratureOptions};
pub use reference::{reference, reference_with, Reference, ReferenceMethod};
pub use report::{report, report_from_config, report_with, IntegralReport};
