//! The `month-rows` crate counts how many rows (weeks) a month spans when laid out in a calendar
//! grid with seven columns.
//!
//! The count depends on the month's length (always taken from a non-leap year) and on the column
//! in which the first day falls, given as a weekday offset starting from 1.
//!
//! ## Examples
//!
//! ```
//! use month_rows::Month;
//!
//! assert_eq!(Month::January.rows(1), 4);
//! assert_eq!(Month::December.rows(7), 5);
//! ```
//!
//! Raw numbers can be checked and counted in one step:
//!
//! ```
//! assert_eq!(month_rows::row_count(2, 7).unwrap(), 4);
//! assert!(month_rows::row_count(13, 1).is_err());
//! ```

mod error;
pub mod iter;
mod month;
mod parse;
#[cfg(feature = "serde")]
mod serde;
mod utils;

pub use error::Error;
pub use error::Result;
pub use month::Month;
pub use parse::Input;

impl Month {
  /// The number of seven-day rows spanned by this month when its first day falls at the given
  /// weekday offset.
  ///
  /// This is `(days + weekday - 1) / 7`, using truncating integer division. The weekday is not
  /// validated; offsets outside `1..=7` are applied to the formula as given.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_rows::Month;
  /// assert_eq!(Month::February.rows(1), 4);
  /// assert_eq!(Month::February.rows(7), 4);
  /// ```
  pub const fn rows(&self, weekday: i32) -> i64 {
    let days = self.days() as i64 + weekday as i64 - 1;
    days / utils::DAYS_PER_ROW
  }
}

/// Count the rows spanned by the given month number (1-12) at the given weekday offset.
///
/// Fails with [`Error::InvalidMonth`] if the month is outside `1..=12`.
pub fn row_count(month: i32, weekday: i32) -> Result<i64> {
  let month = Month::try_from(month)?;
  let rows = month.rows(weekday);
  log::debug!("Counted {} rows for {} at weekday {}", rows, month, weekday);
  Ok(rows)
}
