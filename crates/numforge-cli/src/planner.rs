//! `production-planner` command.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use numforge_config::{PlannerConfig, PlannerStrategy};
use numforge_planner::ProductionPlanner;

use crate::output::write_plan;

/// Solving strategy selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Branch and bound over the mixed-integer program
    Milp,
    /// Visit every integer point inside the resource bounds
    Enumeration,
}

impl From<StrategyArg> for PlannerStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Milp => PlannerStrategy::Milp,
            StrategyArg::Enumeration => PlannerStrategy::Enumeration,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "production-planner")]
#[command(version)]
#[command(about = "Maximize lemonade and fruit juice output under resource limits")]
pub struct PlannerArgs {
    /// Configuration file (TOML or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Solving strategy [default: milp, or the configured one]
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

impl PlannerArgs {
    /// Applies command-line overrides on top of `config`.
    pub fn resolve(&self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        config
    }
}

/// Solves the plan and writes the report block.
///
/// Non-optimal outcomes are reported, not returned as errors.
pub fn run(
    args: &PlannerArgs,
    config: PlannerConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let config = args.resolve(config);
    let plan = ProductionPlanner::from_config(&config).solve();
    write_plan(out, &plan)?;
    Ok(())
}
