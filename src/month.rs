use std::fmt::Display;

use crate::Error;
use crate::iter::MonthIterator;
use crate::utils;

/// A month of the (non-leap) Gregorian year.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Month {
  January = 1,
  February = 2,
  March = 3,
  April = 4,
  May = 5,
  June = 6,
  July = 7,
  August = 8,
  September = 9,
  October = 10,
  November = 11,
  December = 12,
}

macro_rules! month_str {
  ($($num:literal => $variant:ident ~ $short:ident),*) => {
    impl Month {
      /// Construct a month from its number, returning `None` outside `1..=12`.
      pub const fn from_number(month: i32) -> Option<Self> {
        match month {
          $($num => Some(Self::$variant),)*
          _ => None,
        }
      }

      /// The three-letter abbreviation for this month.
      pub const fn abbv(&self) -> &'static str {
        match self {
          $(Self::$variant => stringify!($short),)*
        }
      }
    }

    impl Display for Month {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
          $(Self::$variant => stringify!($variant),)*
        })
      }
    }
  };
}
month_str! {
   1 => January ~ Jan,
   2 => February ~ Feb,
   3 => March ~ Mar,
   4 => April ~ Apr,
   5 => May ~ May,
   6 => June ~ Jun,
   7 => July ~ Jul,
   8 => August ~ Aug,
   9 => September ~ Sep,
  10 => October ~ Oct,
  11 => November ~ Nov,
  12 => December ~ Dec
}

impl Month {
  /// The month number, starting from 1.
  #[inline]
  pub const fn number(&self) -> u8 {
    *self as u8
  }

  /// The number of days in this month. February always has 28.
  #[inline]
  pub const fn days(&self) -> u8 {
    utils::days_in_month(self.number())
  }

  /// An iterator over every month, January through December.
  pub fn iter() -> MonthIterator {
    MonthIterator::new()
  }
}

impl TryFrom<i32> for Month {
  type Error = Error;

  fn try_from(month: i32) -> Result<Self, Self::Error> {
    Self::from_number(month).ok_or(Error::InvalidMonth(month))
  }
}

impl From<Month> for u8 {
  fn from(month: Month) -> Self {
    month.number()
  }
}
