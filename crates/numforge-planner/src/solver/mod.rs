//! Solving strategies for production models.

mod bounds;
mod enumeration;
mod milp;

use std::fmt::Debug;

use numforge_config::PlannerStrategy;

use crate::model::ProductionModel;
use crate::plan::ProductionPlan;

pub use enumeration::EnumerationSolver;
pub use milp::MilpSolver;

/// Trait for turning a production model into a plan.
///
/// Implementations never fail: every outcome, including infeasible or
/// unbounded models, is reported through [`ProductionPlan::status`].
pub trait PlanSolver: Send + Debug {
    /// Solves `model` and returns the resulting plan.
    fn solve(&self, model: &ProductionModel) -> ProductionPlan;

    /// Short name used in log events.
    fn name(&self) -> &'static str;
}

/// Builds the solver selected by `strategy`.
pub fn solver_for(strategy: PlannerStrategy) -> Box<dyn PlanSolver> {
    match strategy {
        PlannerStrategy::Milp => Box::new(MilpSolver::new()),
        PlannerStrategy::Enumeration => Box::new(EnumerationSolver::new()),
    }
}

#[cfg(test)]
mod tests;
