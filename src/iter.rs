//! Iterator over months

use std::iter::Iterator;

use crate::Month;

/// An iterator that yields each month of the year in order.
pub struct MonthIterator {
  cursor: i32,
}

impl MonthIterator {
  pub(crate) const fn new() -> Self {
    Self { cursor: 1 }
  }
}

impl Iterator for MonthIterator {
  type Item = Month;

  fn next(&mut self) -> Option<Self::Item> {
    let answer = Month::from_number(self.cursor);
    if answer.is_some() {
      self.cursor += 1;
    }
    answer
  }
}
