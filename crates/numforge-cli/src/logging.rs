//! Tracing setup for the command-line tools.
//!
//! Log output goes to stderr so the report on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Directives appended to every filter. The MILP backend logs through the
/// `log` facade; its diagnostics must never reach the console.
const SILENCED: &[&str] = &["microlp=off"];

/// Builds the filter from `RUST_LOG`, falling back to `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    for directive in SILENCED {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Installs the global subscriber.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_silences_solver() {
        let rendered = filter("info").to_string();
        assert!(rendered.contains("microlp=off"), "{rendered}");
    }

    #[test]
    fn test_init_twice() {
        init("warn");
        init("debug");
    }
}
