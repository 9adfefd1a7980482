//! Numforge Planner - integer production planning
//!
//! This crate picks non-negative integer production counts for lemonade
//! and fruit juice that maximize total output under shared resource limits:
//! - Model types for products, constraints and the fixed resource model
//! - A normalized solver status and the resulting plan
//! - Solving strategies: `microlp` branch and bound, or grid enumeration

pub mod model;
pub mod plan;
pub mod planner;
pub mod solver;

pub use model::{Constraint, ModelError, Product, ProductionMix, ProductionModel};
pub use plan::{ProductionPlan, SolveStatus};
pub use planner::ProductionPlanner;
pub use solver::{solver_for, EnumerationSolver, MilpSolver, PlanSolver};
