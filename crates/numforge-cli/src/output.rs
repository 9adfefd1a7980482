//! Fixed human-readable report blocks.

use std::io::{self, Write};

use numforge_montecarlo::integrand::FORMULA;
use numforge_montecarlo::IntegralReport;
use numforge_planner::ProductionPlan;

/// Writes the planner block. Counts of a non-optimal plan print as `-`.
pub fn write_plan(out: &mut impl Write, plan: &ProductionPlan) -> io::Result<()> {
    let show = |value: u32| {
        if plan.status.is_optimal() {
            value.to_string()
        } else {
            "-".to_string()
        }
    };

    writeln!(out, "=== Task 1: Production optimization ===")?;
    writeln!(out, "Status: {}", plan.status)?;
    writeln!(out, "Lemonade     : {}", show(plan.lemonade))?;
    writeln!(out, "Fruit Juice  : {}", show(plan.juice))?;
    writeln!(out, "TOTAL        : {}", show(plan.total))?;
    Ok(())
}

/// Writes the integral block with ten decimals per value.
pub fn write_integral_report(out: &mut impl Write, report: &IntegralReport) -> io::Result<()> {
    let seed = report
        .seed
        .map_or_else(|| "os".to_string(), |seed| seed.to_string());

    writeln!(out, "=== Task 2: Monte Carlo integral ===")?;
    writeln!(out, "Function: {}, interval {}", FORMULA, report.interval)?;
    writeln!(out, "Samples: {}, seed={}", report.samples, seed)?;
    writeln!(out, "Monte Carlo estimate : {:.10}", report.estimate)?;
    writeln!(
        out,
        "Reference ({}): {:.10}",
        report.reference.method, report.reference.value
    )?;
    writeln!(out, "Absolute error       : {:.10}", report.absolute_error)?;
    if let Some(se) = report.standard_error {
        writeln!(out, "Standard error       : {:.10}", se)?;
    }
    Ok(())
}
