//! Branch-and-bound solving through `microlp`.

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};
use tracing::debug;

use super::bounds::{derive_bounds, Bounds, Range};
use crate::model::{Product, ProductionMix, ProductionModel};
use crate::plan::{ProductionPlan, SolveStatus};

/// Largest gap between a variable value and its rounded integer.
const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Mixed-integer solver backed by `microlp`.
///
/// Both products become integer variables confined to the ranges the
/// constraints imply; each model constraint becomes a `<=` row. Models
/// whose ranges are open, empty or too wide never reach the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilpSolver;

impl MilpSolver {
    pub fn new() -> Self {
        Self
    }

    /// Builds the program with each variable confined to its derived range.
    fn build(model: &ProductionModel, ranges: [(i32, i32); 2]) -> (Problem, [Variable; 2]) {
        let mut problem = Problem::new(OptimizationDirection::Maximize);
        let vars = [0, 1].map(|idx| {
            let objective = model.objective_coefficient(Product::ALL[idx]) as f64;
            problem.add_integer_var(objective, ranges[idx])
        });

        for constraint in model.constraints() {
            let terms: Vec<(Variable, f64)> = Product::ALL
                .iter()
                .zip(vars)
                .map(|(&product, var)| (var, constraint.coefficient(product) as f64))
                .filter(|&(_, coeff)| coeff != 0.0)
                .collect();
            // Constant rows were already checked while deriving the ranges.
            if terms.is_empty() {
                continue;
            }
            problem.add_constraint(terms, ComparisonOp::Le, constraint.capacity() as f64);
        }

        (problem, vars)
    }
}

/// Variable ranges in the integer type `microlp` accepts, or the status to
/// report when there is no usable finite range.
fn solver_ranges(model: &ProductionModel) -> Result<[(i32, i32); 2], SolveStatus> {
    let ranges = match derive_bounds(model) {
        Bounds::Finite(ranges) => ranges,
        Bounds::Open => return Err(SolveStatus::Unbounded),
        Bounds::Empty => return Err(SolveStatus::Infeasible),
        Bounds::Overflow => return Err(SolveStatus::NotSolved),
    };
    let convert = |range: Range| -> Result<(i32, i32), SolveStatus> {
        let lower = i32::try_from(range.lower).map_err(|_| SolveStatus::NotSolved)?;
        let upper = i32::try_from(range.upper).map_err(|_| SolveStatus::NotSolved)?;
        Ok((lower, upper))
    };
    Ok([convert(ranges[0])?, convert(ranges[1])?])
}

/// Converts a solver value into a unit count, rejecting non-integral or
/// out-of-range values.
fn to_units(value: f64) -> Option<u32> {
    let rounded = value.round();
    if (rounded - value).abs() > INTEGRALITY_TOLERANCE {
        return None;
    }
    if rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return None;
    }
    Some(rounded as u32)
}

impl super::PlanSolver for MilpSolver {
    fn solve(&self, model: &ProductionModel) -> ProductionPlan {
        let ranges = match solver_ranges(model) {
            Ok(ranges) => ranges,
            Err(status) => {
                debug!(solver = "milp", %status, "No finite variable ranges");
                return ProductionPlan::without_solution(status);
            }
        };
        let (problem, [lemonade, juice]) = Self::build(model, ranges);

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(err) => {
                let status = match err {
                    microlp::Error::Infeasible => SolveStatus::Infeasible,
                    microlp::Error::Unbounded => SolveStatus::Unbounded,
                    microlp::Error::InternalError(_) => SolveStatus::NotSolved,
                };
                debug!(solver = "milp", %err, %status, "Solver returned no solution");
                return ProductionPlan::without_solution(status);
            }
        };

        let units = (
            to_units(*solution.var_value(lemonade)),
            to_units(*solution.var_value(juice)),
        );
        let (Some(lemonade), Some(juice)) = units else {
            debug!(solver = "milp", "Solver returned a non-integral point");
            return ProductionPlan::without_solution(SolveStatus::NotSolved);
        };

        let mix = ProductionMix::new(lemonade, juice);
        debug!(
            solver = "milp",
            lemonade,
            juice,
            objective = solution.objective(),
            "Solver returned an optimal point"
        );
        ProductionPlan::optimal(mix)
    }

    fn name(&self) -> &'static str {
        "milp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_units() {
        assert_eq!(to_units(30.0), Some(30));
        assert_eq!(to_units(19.999_999_9), Some(20));
        assert_eq!(to_units(-0.0), Some(0));
        assert_eq!(to_units(2.5), None);
        assert_eq!(to_units(-3.0), None);
    }
}
