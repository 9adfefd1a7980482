//! Exhaustive search over the bounded integer grid.

use tracing::{debug, warn};

use super::bounds::{derive_bounds, Bounds};
use crate::model::{ProductionMix, ProductionModel};
use crate::plan::{ProductionPlan, SolveStatus};

/// Largest number of grid points the solver is willing to visit.
pub const DEFAULT_MAX_GRID_POINTS: u64 = 10_000_000;

/// Solver that visits every integer point inside the derived variable
/// bounds and keeps the best feasible one.
///
/// Ties on the objective are broken in favor of more lemonade.
#[derive(Debug, Clone, Copy)]
pub struct EnumerationSolver {
    max_grid_points: u64,
}

impl EnumerationSolver {
    pub fn new() -> Self {
        Self {
            max_grid_points: DEFAULT_MAX_GRID_POINTS,
        }
    }

    /// Caps the number of grid points; larger grids end as not solved.
    pub fn with_max_grid_points(mut self, max_grid_points: u64) -> Self {
        self.max_grid_points = max_grid_points;
        self
    }
}

impl Default for EnumerationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl super::PlanSolver for EnumerationSolver {
    fn solve(&self, model: &ProductionModel) -> ProductionPlan {
        let [lemonade_range, juice_range] = match derive_bounds(model) {
            Bounds::Finite(ranges) => ranges,
            Bounds::Open => {
                debug!(solver = "enumeration", "No finite bound on a variable");
                return ProductionPlan::without_solution(SolveStatus::Unbounded);
            }
            Bounds::Empty => {
                debug!(solver = "enumeration", "Variable ranges are empty");
                return ProductionPlan::without_solution(SolveStatus::Infeasible);
            }
            Bounds::Overflow => {
                warn!(solver = "enumeration", "Bound propagation overflowed");
                return ProductionPlan::without_solution(SolveStatus::NotSolved);
            }
        };

        let grid_points = lemonade_range.len().saturating_mul(juice_range.len());
        if grid_points > self.max_grid_points {
            warn!(
                solver = "enumeration",
                grid_points,
                limit = self.max_grid_points,
                "Integer grid too large to enumerate"
            );
            return ProductionPlan::without_solution(SolveStatus::NotSolved);
        }

        let mut best: Option<(i64, ProductionMix)> = None;
        for lemonade in lemonade_range.lower..=lemonade_range.upper {
            for juice in juice_range.lower..=juice_range.upper {
                let mix = ProductionMix::new(lemonade, juice);
                if !model.is_feasible(mix) {
                    continue;
                }
                let value = model.objective(mix);
                // Later points carry at least as much lemonade, so `>=` keeps
                // the lemonade-heavy optimum on ties.
                if best.map_or(true, |(best_value, _)| value >= best_value) {
                    best = Some((value, mix));
                }
            }
        }

        match best {
            Some((value, mix)) => {
                debug!(
                    solver = "enumeration",
                    lemonade = mix.lemonade,
                    juice = mix.juice,
                    objective = value,
                    grid_points,
                    "Enumeration found an optimal point"
                );
                ProductionPlan::optimal(mix)
            }
            None => {
                debug!(solver = "enumeration", grid_points, "No feasible grid point");
                ProductionPlan::without_solution(SolveStatus::Infeasible)
            }
        }
    }

    fn name(&self) -> &'static str {
        "enumeration"
    }
}
