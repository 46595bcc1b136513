use std::io;

use tracing_subscriber::EnvFilter;

/// Crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["month_rows"];

/// The default filter level for the given verbosity.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn level(verbosity: u8) -> &'static str {
  match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

fn default_filter(verbosity: u8) -> String {
  let level = level(verbosity);
  CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect::<Vec<_>>().join(",")
}

/// Initialize logging to stderr based on CLI verbosity level.
///
/// Records from the library's `log` calls are forwarded to the same subscriber. `RUST_LOG`
/// overrides the CLI flag if set.
pub fn init(verbosity: u8) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

  tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
