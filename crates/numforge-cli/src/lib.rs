//! Numforge CLI - command-line front ends
//!
//! Two tools share this crate:
//! - `production-planner`: solves the production model and prints the plan
//! - `mc-integral`: estimates `∫ₐᵇ x² dx` and optionally saves a plot

pub mod integral;
pub mod logging;
pub mod output;
pub mod planner;

use std::path::Path;

use anyhow::Context;
use numforge_config::NumForgeConfig;

/// Loads the configuration file if one was given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<NumForgeConfig> {
    match path {
        Some(path) => NumForgeConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(NumForgeConfig::default()),
    }
}
