//! Monte Carlo integral entry point.

use std::io;

use clap::Parser;
use numforge_cli::integral::{run, IntegralArgs};
use numforge_cli::{load_config, logging};

fn main() -> anyhow::Result<()> {
    let args = IntegralArgs::parse();
    let config = load_config(args.config.as_deref())?;
    logging::init(&config.logging.level);

    run(&args, config.estimator, &mut io::stdout().lock())
}
