use std::borrow::Cow;

/// Line endings understood by the engine. All transforms operate on `\n`;
/// hosts normalize CRLF input with [`normalize_line_endings`] and put it back
/// with [`restore_line_endings`].
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,
}

impl LineEnding {
  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
    }
  }
}

/// The line ending every line break of `text` uses. `None` when CRLF and
/// bare LF are mixed or there is no line break at all.
pub fn uniform_line_ending(text: &str) -> Option<LineEnding> {
  let mut endings = text
    .split_inclusive('\n')
    .filter_map(get_line_ending_of_str);
  let first = endings.next()?;
  endings.all(|ending| ending == first).then_some(first)
}

/// Returns the passed line's line ending, if any.
pub fn get_line_ending_of_str(line: &str) -> Option<LineEnding> {
  if line.ends_with("\u{000D}\u{000A}") {
    Some(LineEnding::Crlf)
  } else if line.ends_with('\u{000A}') {
    Some(LineEnding::LF)
  } else {
    None
  }
}

/// Rewrites every CRLF in `text` as a bare LF.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
  if text.contains("\r\n") {
    Cow::Owned(text.replace("\r\n", "\n"))
  } else {
    Cow::Borrowed(text)
  }
}

/// Inverse of [`normalize_line_endings`] for LF-only text.
pub fn restore_line_endings(text: &str, line_ending: LineEnding) -> Cow<'_, str> {
  match line_ending {
    LineEnding::LF => Cow::Borrowed(text),
    LineEnding::Crlf => Cow::Owned(text.replace('\n', line_ending.as_str())),
  }
}

#[cfg(test)]
mod line_ending_tests {
  use super::*;

  #[test]
  fn line_ending_uniform() {
    assert_eq!(uniform_line_ending("\n"), Some(LineEnding::LF));
    assert_eq!(uniform_line_ending("a\r\nb\r\nc"), Some(LineEnding::Crlf));
    assert_eq!(uniform_line_ending("hello"), None);
    assert_eq!(uniform_line_ending(""), None);
    assert_eq!(uniform_line_ending("hello\nworld\r\n"), None);
    assert_eq!(
      uniform_line_ending("a carriage return linefeed\r\n and a linefeed\n"),
      None
    );
  }

  #[test]
  fn get_line_ending_str() {
    assert_eq!(get_line_ending_of_str("abc\r\n"), Some(LineEnding::Crlf));
    assert_eq!(get_line_ending_of_str("abc\n"), Some(LineEnding::LF));
    assert_eq!(get_line_ending_of_str("abc"), None);
  }

  #[test]
  fn normalize_and_restore() {
    let text = "one\r\ntwo\r\n";
    let normalized = normalize_line_endings(text);
    assert_eq!(normalized, "one\ntwo\n");
    assert_eq!(
      restore_line_endings(&normalized, LineEnding::Crlf),
      "one\r\ntwo\r\n"
    );
    assert!(matches!(
      normalize_line_endings("plain\n"),
      Cow::Borrowed("plain\n")
    ));
  }
}
