use clap::Parser;

/// Count the calendar-grid rows (weeks) a month spans.
///
/// Reads a month (1-12) and the weekday offset of its first day (1-7) from standard input, and
/// prints the number of seven-day rows needed to lay out the month.
#[derive(Parser)]
#[command(name = "month-rows", version)]
pub struct Cli {
  /// Increase verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}
