use std::io::BufRead;
use std::str::FromStr;

use crate::Error;
use crate::Month;
use crate::Result;

/// A month and weekday offset, as read from input.
///
/// Neither value is validated here: the month is checked when the row count is computed, and the
/// weekday is never checked.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Input {
  pub month: i32,
  pub weekday: i32,
}

impl Input {
  /// Read a month and weekday from the given reader.
  ///
  /// Lines are consumed only until two whitespace-separated tokens have been seen (or the reader
  /// is exhausted), so this returns promptly on an interactive terminal. Input is handled as raw
  /// bytes: anything after the second token is ignored, even if it is not valid UTF-8.
  pub fn read(mut reader: impl BufRead) -> Result<Self> {
    let mut buf = Vec::new();
    while tokens(&buf).nth(1).is_none() {
      if reader.read_until(b'\n', &mut buf)? == 0 {
        break;
      }
    }
    log::trace!("Read {} bytes of input", buf.len());
    Self::from_bytes(&buf)
  }

  /// Parse a month and weekday from the first two whitespace-separated tokens in `bytes`.
  fn from_bytes(bytes: &[u8]) -> Result<Self> {
    macro_rules! fail {
      ($s:ident, $r:literal) => {
        Error::InputParse { src: String::from_utf8_lossy($s).trim().into(), reason: $r }
      };
    }
    let mut tokens = tokens(bytes);
    let month = tokens.next().ok_or_else(|| fail!(bytes, "Missing month"))?;
    let month = parse_token(month).ok_or_else(|| fail!(bytes, "Failed to parse month"))?;
    let weekday = tokens.next().ok_or_else(|| fail!(bytes, "Missing weekday"))?;
    let weekday = parse_token(weekday).ok_or_else(|| fail!(bytes, "Failed to parse weekday"))?;
    log::trace!("Parsed month {} and weekday {}", month, weekday);
    Ok(Self { month, weekday })
  }

  /// The number of calendar rows for this input.
  pub fn row_count(&self) -> Result<i64> {
    crate::row_count(self.month, self.weekday)
  }

  /// The validated month for this input.
  pub fn month(&self) -> Result<Month> {
    Month::try_from(self.month)
  }
}

impl FromStr for Input {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::from_bytes(s.as_bytes())
  }
}

/// The non-empty, ASCII-whitespace-separated tokens in `bytes`.
fn tokens(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
  bytes.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty())
}

/// Decode a token as an `i32`; tokens that are not UTF-8 are not integers either.
fn parse_token(token: &[u8]) -> Option<i32> {
  std::str::from_utf8(token).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use assert2::check;

  use super::*;

  #[test]
  fn test_parse() -> Result<()> {
    check!("1 1".parse::<Input>()? == Input { month: 1, weekday: 1 });
    check!("  12\t7\n".parse::<Input>()? == Input { month: 12, weekday: 7 });
    check!("2 7 99 foo".parse::<Input>()? == Input { month: 2, weekday: 7 });
    check!("-3 0".parse::<Input>()? == Input { month: -3, weekday: 0 });
    Ok(())
  }

  #[test]
  fn test_parse_errors() {
    for (s, reason) in [
      ("", "Missing month"),
      ("   \n", "Missing month"),
      ("5", "Missing weekday"),
      ("foo 1", "Failed to parse month"),
      ("3.5 1", "Failed to parse month"),
      ("3 x", "Failed to parse weekday"),
      ("3 99999999999", "Failed to parse weekday"),
    ] {
      let err = s.parse::<Input>();
      check!(matches!(err, Err(Error::InputParse { reason: r, .. }) if r == reason), "On: {:?}", s);
    }
    check!("foo".parse::<Input>().map_err(|e| e.to_string()).unwrap_err().contains("foo"));
  }

  #[test]
  fn test_read_across_lines() -> Result<()> {
    check!(Input::read(Cursor::new("2\n7\n"))? == Input { month: 2, weekday: 7 });
    check!(Input::read(Cursor::new("\n\n12 7"))? == Input { month: 12, weekday: 7 });
    check!(Input::read(Cursor::new("1 1\nnot read\n"))? == Input { month: 1, weekday: 1 });
    check!(matches!(Input::read(Cursor::new("4\n")), Err(Error::InputParse { .. })));
    Ok(())
  }

  #[test]
  fn test_read_non_utf8() -> Result<()> {
    check!(Input::read(&b"12 7 \xff\n"[..])? == Input { month: 12, weekday: 7 });
    check!(Input::read(&b"4\n6\xfe\xff"[..]).is_err());
    check!(Input::read(&b"4\n6 \xfe\xff\nmore\n"[..])? == Input { month: 4, weekday: 6 });
    for (bytes, reason) in [
      (&b"\xff 1\n"[..], "Failed to parse month"),
      (&b"3 \xc3\n"[..], "Failed to parse weekday"),
    ] {
      let err = Input::read(bytes);
      check!(matches!(err, Err(Error::InputParse { reason: r, .. }) if r == reason), "On: {bytes:?}");
    }
    Ok(())
  }

  #[test]
  fn test_row_count() -> Result<()> {
    let input = Input { month: 12, weekday: 7 };
    check!(input.month()? == Month::December);
    check!(input.row_count()? == 5);
    check!(matches!(Input { month: 13, weekday: 1 }.row_count(), Err(Error::InvalidMonth(13))));
    Ok(())
  }
}
