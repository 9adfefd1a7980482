//! Planner facade tying a model to a solving strategy.

use numforge_config::{PlannerConfig, PlannerStrategy};
use tracing::{debug, warn};

use crate::model::ProductionModel;
use crate::plan::{ProductionPlan, SolveStatus};
use crate::solver::{solver_for, PlanSolver};

/// Picks production quantities maximizing total output.
///
/// # Example
///
/// ```
/// use numforge_planner::{ProductionPlanner, SolveStatus};
///
/// let plan = ProductionPlanner::new().solve();
/// assert_eq!(plan.status, SolveStatus::Optimal);
/// assert_eq!((plan.lemonade, plan.juice, plan.total), (30, 20, 50));
/// ```
#[derive(Debug)]
pub struct ProductionPlanner {
    model: ProductionModel,
    solver: Box<dyn PlanSolver>,
}

impl ProductionPlanner {
    /// Planner over the standard model using the MILP strategy.
    pub fn new() -> Self {
        Self::with_strategy(PlannerStrategy::default())
    }

    pub fn with_strategy(strategy: PlannerStrategy) -> Self {
        Self {
            model: ProductionModel::standard(),
            solver: solver_for(strategy),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::with_strategy(config.strategy)
    }

    /// Replaces the model to solve.
    pub fn with_model(mut self, model: ProductionModel) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &ProductionModel {
        &self.model
    }

    /// Solves the model once. Nothing is cached between calls.
    ///
    /// An optimal answer from the backend that fails the model's own
    /// constraint check is reported as [`SolveStatus::NotSolved`].
    pub fn solve(&self) -> ProductionPlan {
        let plan = self.solver.solve(&self.model);

        if let Some(mix) = plan.mix() {
            if let Some(violated) = self.model.violated_constraint(mix) {
                warn!(
                    solver = self.solver.name(),
                    constraint = violated.name(),
                    lemonade = mix.lemonade,
                    juice = mix.juice,
                    "Solver returned a point violating a constraint"
                );
                return ProductionPlan::without_solution(SolveStatus::NotSolved);
            }
        }

        debug!(
            solver = self.solver.name(),
            status = %plan.status,
            lemonade = plan.lemonade,
            juice = plan.juice,
            total = plan.total,
            "Planning finished"
        );
        plan
    }
}

impl Default for ProductionPlanner {
    fn default() -> Self {
        Self::new()
    }
}
