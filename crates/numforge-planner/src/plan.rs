//! Solver outcome types.

use std::fmt;

use crate::model::ProductionMix;

/// Outcome of solving a production model.
///
/// Backend-specific result codes are normalized into these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// An optimal integer point was found.
    Optimal,
    /// The constraints cannot be satisfied simultaneously.
    Infeasible,
    /// The objective can grow without limit.
    Unbounded,
    /// The solver stopped without a usable answer.
    NotSolved,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::NotSolved => "Not Solved",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single planner invocation.
///
/// For any status other than [`SolveStatus::Optimal`] the unit counts are
/// zero and carry no meaning.
///
/// # Example
///
/// ```
/// use numforge_planner::{ProductionMix, ProductionPlan, SolveStatus};
///
/// let plan = ProductionPlan::optimal(ProductionMix::new(30, 20));
/// assert_eq!(plan.total, 50);
///
/// let plan = ProductionPlan::without_solution(SolveStatus::Infeasible);
/// assert!(plan.mix().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionPlan {
    pub status: SolveStatus,
    pub lemonade: u32,
    pub juice: u32,
    pub total: u32,
}

impl ProductionPlan {
    pub fn optimal(mix: ProductionMix) -> Self {
        Self {
            status: SolveStatus::Optimal,
            lemonade: mix.lemonade,
            juice: mix.juice,
            total: mix.total(),
        }
    }

    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            lemonade: 0,
            juice: 0,
            total: 0,
        }
    }

    /// The chosen production counts, only when the plan is optimal.
    pub fn mix(&self) -> Option<ProductionMix> {
        self.status
            .is_optimal()
            .then(|| ProductionMix::new(self.lemonade, self.juice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Optimal.to_string(), "Optimal");
        assert_eq!(SolveStatus::Infeasible.to_string(), "Infeasible");
        assert_eq!(SolveStatus::Unbounded.to_string(), "Unbounded");
        assert_eq!(SolveStatus::NotSolved.to_string(), "Not Solved");
    }

    #[test]
    fn test_optimal_plan_total() {
        let plan = ProductionPlan::optimal(ProductionMix::new(4, 9));
        assert!(plan.status.is_optimal());
        assert_eq!(plan.total, plan.lemonade + plan.juice);
        assert_eq!(plan.mix(), Some(ProductionMix::new(4, 9)));
    }

    #[test]
    fn test_non_optimal_plan_is_zeroed() {
        let plan = ProductionPlan::without_solution(SolveStatus::Unbounded);
        assert!(!plan.status.is_optimal());
        assert_eq!((plan.lemonade, plan.juice, plan.total), (0, 0, 0));
        assert_eq!(plan.mix(), None);
    }
}
