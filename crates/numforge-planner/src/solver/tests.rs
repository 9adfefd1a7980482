//! Tests shared by both solving strategies.

use proptest::prelude::*;

use super::*;
use crate::model::{Constraint, ProductionMix, ProductionModel};
use crate::plan::SolveStatus;

fn solvers() -> Vec<Box<dyn PlanSolver>> {
    vec![
        solver_for(PlannerStrategy::Milp),
        solver_for(PlannerStrategy::Enumeration),
    ]
}

#[test]
fn test_standard_model_optimum() {
    let model = ProductionModel::standard();
    for solver in solvers() {
        let plan = solver.solve(&model);
        assert_eq!(plan.status, SolveStatus::Optimal, "{}", solver.name());
        assert_eq!(plan.lemonade, 30, "{}", solver.name());
        assert_eq!(plan.juice, 20, "{}", solver.name());
        assert_eq!(plan.total, 50, "{}", solver.name());
    }
}

#[test]
fn test_optimum_satisfies_every_constraint() {
    let model = ProductionModel::standard();
    for solver in solvers() {
        let plan = solver.solve(&model);
        let mix = plan.mix().unwrap();
        for constraint in model.constraints() {
            assert!(
                constraint.is_satisfied_by(mix),
                "{} violated by {}",
                constraint,
                solver.name()
            );
        }
        assert_eq!(i64::from(plan.total), model.objective(mix));
    }
}

#[test]
fn test_binding_constraints_at_optimum() {
    let model = ProductionModel::standard();
    let mix = ProductionMix::new(30, 20);
    let slack: Vec<_> = model.constraints().iter().map(|c| c.slack(mix)).collect();
    // water, sugar, lemon juice, fruit puree
    assert_eq!(slack, [20, 20, 0, 0]);
}

#[test]
fn test_infeasible_model() {
    let model = ProductionModel::new(vec![
        Constraint::new("minimum", -1, -1, -10),
        Constraint::new("maximum", 1, 1, 5),
    ])
    .unwrap();

    for solver in solvers() {
        let plan = solver.solve(&model);
        assert_eq!(plan.status, SolveStatus::Infeasible, "{}", solver.name());
        assert_eq!(plan.total, 0);
        assert!(plan.mix().is_none());
    }
}

#[test]
fn test_constant_constraint_is_infeasible() {
    let model = ProductionModel::new(vec![
        Constraint::new("cap", 1, 1, 10),
        Constraint::new("never", 0, 0, -1),
    ])
    .unwrap();

    for solver in solvers() {
        assert_eq!(
            solver.solve(&model).status,
            SolveStatus::Infeasible,
            "{}",
            solver.name()
        );
    }
}

#[test]
fn test_unbounded_model() {
    let model = ProductionModel::new(vec![Constraint::new("lemon_only", 1, 0, 10)]).unwrap();

    for solver in solvers() {
        let plan = solver.solve(&model);
        assert_eq!(plan.status, SolveStatus::Unbounded, "{}", solver.name());
        assert!(plan.mix().is_none());
    }
}

#[test]
fn test_infeasible_bounded_variable_with_open_other() {
    // Juice is unconstrained, but no lemonade count satisfies both rows.
    let model = ProductionModel::new(vec![
        Constraint::new("at_least_five", -1, 0, -5),
        Constraint::new("at_most_three", 1, 0, 3),
    ])
    .unwrap();

    for solver in solvers() {
        assert_eq!(
            solver.solve(&model).status,
            SolveStatus::Infeasible,
            "{}",
            solver.name()
        );
    }
}

#[test]
fn test_extreme_coefficients_not_solved() {
    let model = ProductionModel::new(vec![
        Constraint::new("steep", 1, -i64::MAX, 0),
        Constraint::new("cap", 0, 1, 2),
    ])
    .unwrap();

    for solver in solvers() {
        assert_eq!(
            solver.solve(&model).status,
            SolveStatus::NotSolved,
            "{}",
            solver.name()
        );
    }
}

fn assert_optimum(model: &ProductionModel, total: u32) {
    for solver in solvers() {
        let plan = solver.solve(model);
        assert_eq!(plan.status, SolveStatus::Optimal, "{}", solver.name());
        assert_eq!(plan.total, total, "{}", solver.name());
        assert!(model.is_feasible(plan.mix().unwrap()), "{}", solver.name());
    }
}

#[test]
fn test_tight_water_optimum() {
    let model = ProductionModel::new(vec![
        Constraint::new("water", 1, 3, 16),
        Constraint::new("lemon_juice", 1, 0, 4),
        Constraint::new("fruit_puree", 0, 2, 8),
    ])
    .unwrap();

    for solver in solvers() {
        let plan = solver.solve(&model);
        assert_eq!(plan.status, SolveStatus::Optimal, "{}", solver.name());
        assert_eq!((plan.lemonade, plan.juice, plan.total), (4, 4, 8), "{}", solver.name());
    }
}

#[test]
fn test_fractional_relaxation_optimum() {
    // The relaxation peaks at 3.5; the best integer total is 3.
    let model = ProductionModel::new(vec![Constraint::new("shared", 2, 2, 7)]).unwrap();
    assert_optimum(&model, 3);
}

#[test]
fn test_coupled_optimum() {
    let model = ProductionModel::new(vec![
        Constraint::new("gap", 1, -1, 2),
        Constraint::new("cap", 0, 1, 3),
    ])
    .unwrap();
    assert_optimum(&model, 8);
}

#[test]
fn test_minimum_production_optimum() {
    let model = ProductionModel::new(vec![
        Constraint::new("min_lemonade", -1, 0, -3),
        Constraint::new("shared", 1, 1, 10),
        Constraint::new("juice_cap", 0, 1, 4),
    ])
    .unwrap();
    assert_optimum(&model, 10);
}

#[test]
fn test_grid_limit() {
    let solver = EnumerationSolver::new().with_max_grid_points(100);
    let plan = solver.solve(&ProductionModel::standard());
    assert_eq!(plan.status, SolveStatus::NotSolved);
}

#[test]
fn test_tie_prefers_lemonade() {
    let model = ProductionModel::new(vec![
        Constraint::new("shared", 1, 1, 4),
        Constraint::new("lemon", 1, 0, 3),
        Constraint::new("juice", 0, 1, 3),
    ])
    .unwrap();

    let plan = EnumerationSolver::new().solve(&model);
    assert_eq!(plan.status, SolveStatus::Optimal);
    assert_eq!((plan.lemonade, plan.juice, plan.total), (3, 1, 4));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn strategies_agree_on_objective(
        water in 0i64..60,
        lemon_cap in 0i64..25,
        puree_cap in 0i64..25,
        lemon_water in 1i64..4,
        juice_water in 1i64..4,
    ) {
        let model = ProductionModel::new(vec![
            Constraint::new("water", lemon_water, juice_water, water),
            Constraint::new("lemon_juice", 1, 0, lemon_cap),
            Constraint::new("fruit_puree", 0, 2, puree_cap),
        ])
        .unwrap();

        let milp = MilpSolver::new().solve(&model);
        let grid = EnumerationSolver::new().solve(&model);

        prop_assert_eq!(milp.status, SolveStatus::Optimal);
        prop_assert_eq!(grid.status, SolveStatus::Optimal);
        prop_assert_eq!(milp.total, grid.total);
        prop_assert!(model.is_feasible(milp.mix().unwrap()));
        prop_assert!(model.is_feasible(grid.mix().unwrap()));
    }
}
