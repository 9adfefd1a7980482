//! Variable ranges implied by a production model.
//!
//! Each constraint `c_x·x + c_y·y <= cap` tightens `x` using the range
//! already known for `y`: a positive `c_x` gives an upper bound, a negative
//! one a lower bound. A few passes let coupled constraints feed each other.

use crate::model::{Product, ProductionModel};

/// Passes of propagation across coupled constraints.
const PROPAGATION_PASSES: usize = 4;

/// Inclusive range of one decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    pub lower: u32,
    pub upper: u32,
}

impl Range {
    /// Number of integer values in the range.
    pub fn len(&self) -> u64 {
        u64::from(self.upper - self.lower) + 1
    }
}

/// Outcome of bound derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bounds {
    /// Ranges for lemonade and juice.
    Finite([Range; 2]),
    /// Some variable has no finite upper bound.
    Open,
    /// No non-negative point satisfies every constraint.
    Empty,
    /// Coefficients too large to propagate in 64-bit arithmetic.
    Overflow,
}

#[derive(Debug)]
struct Overflow;

#[derive(Debug)]
enum Stop {
    Empty,
    Overflow,
}

impl From<Overflow> for Stop {
    fn from(_: Overflow) -> Self {
        Stop::Overflow
    }
}

/// Smallest value of `coeff · v` for `v` in `[lower, upper]`, or `None`
/// when it is unbounded below.
fn min_term(coeff: i64, lower: i64, upper: Option<i64>) -> Result<Option<i64>, Overflow> {
    if coeff >= 0 {
        return coeff.checked_mul(lower).map(Some).ok_or(Overflow);
    }
    match upper {
        Some(upper) => coeff.checked_mul(upper).map(Some).ok_or(Overflow),
        None => Ok(None),
    }
}

fn propagate(model: &ProductionModel) -> Result<([i64; 2], [Option<i64>; 2]), Stop> {
    let mut lower = [0_i64; 2];
    let mut upper: [Option<i64>; 2] = [None, None];

    for _ in 0..PROPAGATION_PASSES {
        for constraint in model.constraints() {
            let constant = Product::ALL
                .iter()
                .all(|&p| constraint.coefficient(p) == 0);
            if constant {
                if constraint.capacity() < 0 {
                    return Err(Stop::Empty);
                }
                continue;
            }

            for (idx, &product) in Product::ALL.iter().enumerate() {
                let other = 1 - idx;
                let coeff = constraint.coefficient(product);
                if coeff == 0 {
                    continue;
                }
                let other_coeff = constraint.coefficient(Product::ALL[other]);
                let Some(other_min) = min_term(other_coeff, lower[other], upper[other])? else {
                    continue;
                };
                let residual = constraint
                    .capacity()
                    .checked_sub(other_min)
                    .ok_or(Overflow)?;

                if coeff > 0 {
                    let bound = residual.div_euclid(coeff);
                    if bound < lower[idx] {
                        return Err(Stop::Empty);
                    }
                    upper[idx] = Some(upper[idx].map_or(bound, |ub| ub.min(bound)));
                } else {
                    let magnitude = coeff.checked_neg().ok_or(Overflow)?;
                    let bound = residual
                        .div_euclid(magnitude)
                        .checked_neg()
                        .ok_or(Overflow)?;
                    if upper[idx].is_some_and(|ub| bound > ub) {
                        return Err(Stop::Empty);
                    }
                    lower[idx] = lower[idx].max(bound);
                }
            }
        }
    }

    Ok((lower, upper))
}

fn to_range(lower: i64, upper: i64) -> Option<Range> {
    Some(Range {
        lower: u32::try_from(lower).ok()?,
        upper: u32::try_from(upper).ok()?,
    })
}

/// Derives the range of each variable.
///
/// A variable left without an upper bound makes the result [`Bounds::Open`].
/// When the other variable is bounded, every constraint then has a
/// non-positive coefficient on the open one, so feasibility reduces to the
/// bounded range being non-empty, which propagation already checks.
pub(crate) fn derive_bounds(model: &ProductionModel) -> Bounds {
    let (lower, upper) = match propagate(model) {
        Ok(found) => found,
        Err(Stop::Empty) => return Bounds::Empty,
        Err(Stop::Overflow) => return Bounds::Overflow,
    };

    let [Some(lemonade), Some(juice)] = upper else {
        return Bounds::Open;
    };
    match (to_range(lower[0], lemonade), to_range(lower[1], juice)) {
        (Some(l), Some(j)) => Bounds::Finite([l, j]),
        _ => Bounds::Overflow,
    }
}
