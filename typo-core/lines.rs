//! Logical line helpers.
//!
//! A line is the text between two `\n` boundaries. Splitting on `\n` and
//! joining with `\n` round-trips, including a trailing empty line.

use std::borrow::Cow;

/// Applies `f` to every line of `text` and rejoins the results with `\n`.
///
/// The number of lines is preserved: `map_lines("a\n", f)` yields
/// `f("a") + "\n" + f("")`.
pub fn map_lines<F>(text: &str, mut f: F) -> String
where
  F: FnMut(&str) -> Cow<'_, str>,
{
  let mut out = String::with_capacity(text.len());
  for (idx, line) in text.split('\n').enumerate() {
    if idx > 0 {
      out.push('\n');
    }
    out.push_str(&f(line));
  }
  out
}

/// Lines whose trimmed form is not empty.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
  text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Joins lines with `\n`.
pub fn join_lines<I, S>(lines: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut out = String::new();
  for (idx, line) in lines.into_iter().enumerate() {
    if idx > 0 {
      out.push('\n');
    }
    out.push_str(line.as_ref());
  }
  out
}

#[cfg(test)]
mod test {
  use super::*;

  fn shout(line: &str) -> Cow<'_, str> {
    if line.is_empty() {
      Cow::Borrowed(line)
    } else {
      Cow::Owned(line.to_uppercase())
    }
  }

  #[test]
  fn test_map_lines_preserves_structure() {
    assert_eq!(map_lines("a\nb", shout), "A\nB");
    assert_eq!(map_lines("a\n", shout), "A\n");
    assert_eq!(map_lines("\n\nx", shout), "\n\nX");
    assert_eq!(map_lines("", shout), "");
  }

  #[test]
  fn test_non_blank_lines() {
    let lines: Vec<_> = non_blank_lines("a\n\n  \n b\n").collect();
    assert_eq!(lines, vec!["a", " b"]);
  }

  #[test]
  fn test_join_lines() {
    assert_eq!(join_lines(["a", "b", "c"]), "a\nb\nc");
    assert_eq!(join_lines(Vec::<String>::new()), "");
  }

  quickcheck::quickcheck! {
      fn identity_map_is_lossless(s: String) -> bool {
          map_lines(&s, |line| Cow::Borrowed(line)) == s
      }
  }
}
