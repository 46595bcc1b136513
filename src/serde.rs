use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Unexpected;
use serde::de::Visitor;

use crate::Month;

impl Serialize for Month {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.number())
  }
}

struct MonthVisitor;

impl Visitor<'_> for MonthVisitor {
  type Value = Month;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a month number from 1 to 12")
  }

  fn visit_i64<E: serde::de::Error>(self, n: i64) -> Result<Self::Value, E> {
    i32::try_from(n)
      .ok()
      .and_then(Month::from_number)
      .ok_or_else(|| E::invalid_value(Unexpected::Signed(n), &self))
  }

  fn visit_u64<E: serde::de::Error>(self, n: u64) -> Result<Self::Value, E> {
    i32::try_from(n)
      .ok()
      .and_then(Month::from_number)
      .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(n), &self))
  }
}

impl<'de> Deserialize<'de> for Month {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_u8(MonthVisitor)
  }
}
