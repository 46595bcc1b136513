use thiserror::Error;

/// Errors raised while reading input or counting rows.
#[derive(Debug, Error)]
pub enum Error {
  /// The input did not contain a month and a weekday as two integers.
  #[error("Parse error attempting to read month and weekday from {src:?}: {reason}")]
  InputParse { src: String, reason: &'static str },

  /// The month number was outside `1..=12`.
  #[error("Invalid month {0}: expected a number from 1 to 12")]
  InvalidMonth(i32),

  #[error("Failed to read input")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
