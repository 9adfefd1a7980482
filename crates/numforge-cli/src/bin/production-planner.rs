//! Production planner entry point.

use std::io;

use clap::Parser;
use numforge_cli::planner::{run, PlannerArgs};
use numforge_cli::{load_config, logging};

fn main() -> anyhow::Result<()> {
    let args = PlannerArgs::parse();
    let config = load_config(args.config.as_deref())?;
    logging::init(&config.logging.level);

    run(&args, config.planner, &mut io::stdout().lock())
}
