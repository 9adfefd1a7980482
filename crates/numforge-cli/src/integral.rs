//! `mc-integral` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use numforge_config::{EstimatorConfig, ReferenceStrategy};
use numforge_montecarlo::{report_from_config, save_plot};
use tracing::warn;

use crate::output::write_integral_report;

#[derive(Parser, Debug, Clone)]
#[command(name = "mc-integral")]
#[command(version)]
#[command(about = "Monte Carlo integration for f(x)=x^2")]
pub struct IntegralArgs {
    /// Configuration file (TOML or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lower bound [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Upper bound [default: 2.0]
    #[arg(long, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Number of random samples [default: 200000]
    #[arg(long)]
    pub samples: Option<u64>,

    /// Random seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save a plot of the integrated region
    #[arg(long)]
    pub plot: bool,

    /// Plot output path [default: integral_plot.svg]
    #[arg(long, value_name = "FILE")]
    pub plot_path: Option<PathBuf>,

    /// Use the closed-form reference instead of quadrature
    #[arg(long)]
    pub analytic: bool,
}

impl IntegralArgs {
    /// Applies command-line overrides on top of `config`.
    ///
    /// Precedence is flag, then configuration file, then built-in default.
    pub fn resolve(&self, mut config: EstimatorConfig) -> EstimatorConfig {
        if let Some(a) = self.a {
            config.lower = a;
        }
        if let Some(b) = self.b {
            config.upper = b;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(path) = &self.plot_path {
            config.plot_path = path.clone();
        }
        if self.analytic {
            config.reference = ReferenceStrategy::Analytic;
        }
        config
    }
}

/// Computes the report, writes it, then saves the plot if requested.
///
/// A plot that cannot be saved is logged as a warning; the report
/// already written is left untouched and the run still succeeds.
pub fn run(
    args: &IntegralArgs,
    config: EstimatorConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let config = args.resolve(config);
    config.validate().context("invalid estimator settings")?;

    let report = report_from_config(&config).context("Monte Carlo estimation failed")?;
    write_integral_report(out, &report)?;

    if args.plot {
        match save_plot(config.lower, config.upper, &config.plot_path) {
            Ok(()) => writeln!(out, "Plot saved: {}", config.plot_path.display())?,
            Err(err) => warn!(%err, path = %config.plot_path.display(), "Plot not saved"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse(args: &[&str]) -> IntegralArgs {
        let mut argv = vec!["mc-integral"];
        argv.extend_from_slice(args);
        IntegralArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).resolve(EstimatorConfig::default());
        assert_eq!(config.lower, 0.0);
        assert_eq!(config.upper, 2.0);
        assert_eq!(config.samples, 200_000);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.reference, ReferenceStrategy::Auto);
        assert_eq!(config.plot_path, PathBuf::from("integral_plot.svg"));
    }

    #[test]
    fn test_flags_override_config() {
        let base = EstimatorConfig {
            lower: 5.0,
            samples: 10,
            ..EstimatorConfig::default()
        };
        let args = parse(&["--a", "-1.5", "--b", "3", "--seed", "7", "--analytic"]);
        let config = args.resolve(base);
        assert_eq!(config.lower, -1.5);
        assert_eq!(config.upper, 3.0);
        assert_eq!(config.samples, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.reference, ReferenceStrategy::Analytic);
    }

    #[test]
    fn test_malformed_number_rejected() {
        let err = IntegralArgs::try_parse_from(["mc-integral", "--samples", "many"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(IntegralArgs::try_parse_from(["mc-integral", "--samples", "-5"]).is_err());
    }

    #[test]
    fn test_run_writes_report() {
        let args = parse(&["--samples", "20000"]);
        let mut buf = Vec::new();
        run(&args, EstimatorConfig::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("=== Task 2: Monte Carlo integral ==="));
        assert!(text.contains("Samples: 20000, seed=42"));
        assert!(!text.contains("Plot saved"));
    }

    #[test]
    fn test_run_saves_plot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let path_arg = path.to_string_lossy().into_owned();
        let args = parse(&["--samples", "100", "--plot", "--plot-path", &path_arg]);

        let mut buf = Vec::new();
        run(&args, EstimatorConfig::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Plot saved:"));
        assert!(path.exists());
    }

    #[test]
    fn test_plot_failure_keeps_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("plot.svg");
        let path_arg = path.to_string_lossy().into_owned();
        let args = parse(&["--samples", "100", "--plot", "--plot-path", &path_arg]);

        let mut buf = Vec::new();
        run(&args, EstimatorConfig::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Absolute error"));
        assert!(!text.contains("Plot saved"));
    }

    #[test]
    fn test_plot_failure_is_logged_as_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("plot.svg");
        let path_arg = path.to_string_lossy().into_owned();
        let args = parse(&["--samples", "100", "--plot", "--plot-path", &path_arg]);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();
        let mut buf = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            run(&args, EstimatorConfig::default(), &mut buf)
        })
        .unwrap();

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("Plot not saved"), "{logs}");
    }

    #[test]
    fn test_zero_samples_is_error() {
        let args = parse(&["--samples", "0"]);
        let mut buf = Vec::new();
        assert!(run(&args, EstimatorConfig::default(), &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
