//! Configuration system for numforge.
//!
//! Load planner and estimator settings from TOML or YAML files so the
//! command-line tools can run with project defaults without repeating flags.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use numforge_config::{NumForgeConfig, PlannerStrategy, ReferenceStrategy};
//!
//! let config = NumForgeConfig::from_toml_str(r#"
//!     [planner]
//!     strategy = "enumeration"
//!
//!     [estimator]
//!     lower = 1.0
//!     upper = 3.0
//!     samples = 5000
//!     reference = "analytic"
//! "#).unwrap();
//!
//! assert_eq!(config.planner.strategy, PlannerStrategy::Enumeration);
//! assert_eq!(config.estimator.samples, 5000);
//! assert_eq!(config.estimator.reference, ReferenceStrategy::Analytic);
//! // Unset fields keep their defaults.
//! assert_eq!(config.estimator.seed, Some(42));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use numforge_config::NumForgeConfig;
//!
//! let config = NumForgeConfig::load("numforge.toml").unwrap_or_default();
//! assert_eq!(config.estimator.samples, 200_000);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower integration bound.
pub const DEFAULT_LOWER: f64 = 0.0;

/// Default upper integration bound.
pub const DEFAULT_UPPER: f64 = 2.0;

/// Default number of Monte Carlo samples.
pub const DEFAULT_SAMPLES: u64 = 200_000;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default output path of the integral plot.
pub const DEFAULT_PLOT_PATH: &str = "integral_plot.svg";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration shared by both tools.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NumForgeConfig {
    /// Production planner settings.
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Integral estimator settings.
    #[serde(default)]
    pub estimator: EstimatorConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NumForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, everything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the planner strategy.
    pub fn with_planner_strategy(mut self, strategy: PlannerStrategy) -> Self {
        self.planner.strategy = strategy;
        self
    }

    /// Sets the integration bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.estimator.lower = lower;
        self.estimator.upper = upper;
        self
    }

    /// Sets the Monte Carlo sample count.
    pub fn with_samples(mut self, samples: u64) -> Self {
        self.estimator.samples = samples;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.estimator.seed = Some(seed);
        self
    }

    /// Sets the reference strategy.
    pub fn with_reference(mut self, reference: ReferenceStrategy) -> Self {
        self.estimator.reference = reference;
        self
    }

    /// Sets the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

/// How the production planner solves its integer program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerStrategy {
    /// Mixed-integer linear programming via branch and bound.
    #[default]
    Milp,

    /// Exhaustive enumeration of the bounded integer grid.
    Enumeration,
}

/// Production planner configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Solving strategy.
    #[serde(default)]
    pub strategy: PlannerStrategy,
}

/// How the reference value of an integral is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStrategy {
    /// Numerical quadrature, falling back to the closed form on failure.
    #[default]
    Auto,

    /// Closed-form antiderivative only.
    Analytic,
}

/// Integral estimator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EstimatorConfig {
    /// Lower integration bound.
    pub lower: f64,

    /// Upper integration bound.
    pub upper: f64,

    /// Number of uniform samples.
    pub samples: u64,

    /// Random seed for reproducible results. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Reference value strategy.
    pub reference: ReferenceStrategy,

    /// Where the plot is written when plotting is requested.
    pub plot_path: PathBuf,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            samples: DEFAULT_SAMPLES,
            seed: Some(DEFAULT_SEED),
            reference: ReferenceStrategy::default(),
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
        }
    }
}

impl EstimatorConfig {
    /// Checks that the sample count is positive and both bounds are finite.
    ///
    /// Reversed bounds are accepted; they describe a negatively oriented
    /// integral.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::Invalid(
                "estimator.samples must be at least 1".to_string(),
            ));
        }
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "estimator bounds must be finite, got [{}, {}]",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Default `tracing` level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
