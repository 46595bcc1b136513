/// The number of days in each month of a non-leap year, indexed by month number.
///
/// Index 0 is unused and holds a sentinel of 0.
pub(crate) const MONTH_DAYS: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The number of columns (days) in one row of a calendar grid.
pub(crate) const DAYS_PER_ROW: i64 = 7;

/// Return the number of days in the given month (1-12) of a non-leap year.
pub(crate) const fn days_in_month(month: u8) -> u8 {
  MONTH_DAYS[month as usize]
}
