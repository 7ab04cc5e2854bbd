//! Bulleted and numbered lists.
//!
//! Both builders drop blank lines, trim every remaining line and prefix it.
//! Existing markers are recognised so running a builder over its own output
//! changes nothing.

use std::sync::LazyLock;

use regex::Regex;
use typo_core::lines::non_blank_lines;

pub const BULLET: &str = "- ";

static NUMBER_MARKER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("number marker regex"));

/// Prefixes every non-blank line with `"- "`, unless it already starts with
/// one.
pub fn unordered_list(text: &str) -> String {
  non_blank_lines(text)
    .map(|line| {
      let line = line.trim();
      if line.starts_with(BULLET) {
        line.to_string()
      } else {
        format!("{BULLET}{line}")
      }
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Numbers every non-blank line starting at 1, replacing any number marker
/// the line already had.
pub fn ordered_list(text: &str) -> String {
  non_blank_lines(text)
    .enumerate()
    .map(|(idx, line)| {
      let line = line.trim();
      let line = NUMBER_MARKER
        .find(line)
        .map_or(line, |marker| &line[marker.end()..]);
      format!("{}. {line}", idx + 1)
    })
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_unordered_list() {
    assert_eq!(unordered_list("x\ny"), "- x\n- y");
    assert_eq!(unordered_list("- x\n- y"), "- x\n- y");
    assert_eq!(unordered_list("  a  \n\n\n b\n"), "- a\n- b");
    assert_eq!(unordered_list(""), "");
    assert_eq!(unordered_list("\n \n"), "");
  }

  #[test]
  fn test_ordered_list() {
    assert_eq!(ordered_list("b\na\n\nc"), "1. b\n2. a\n3. c");
    assert_eq!(ordered_list("1. b\n2. a\n3. c"), "1. b\n2. a\n3. c");
    // Renumbers after lines were removed or reordered.
    assert_eq!(ordered_list("3. c\n1. a"), "1. c\n2. a");
    assert_eq!(ordered_list("  padded  "), "1. padded");
    assert_eq!(ordered_list(""), "");
  }

  #[test]
  fn test_ordered_list_keeps_non_marker_numbers() {
    assert_eq!(ordered_list("2024 was a year"), "1. 2024 was a year");
    assert_eq!(ordered_list("3.14 is pi"), "1. 3.14 is pi");
  }

  quickcheck::quickcheck! {
      fn unordered_list_is_idempotent(s: String) -> bool {
          let once = unordered_list(&s);
          unordered_list(&once) == once
      }

      fn ordered_list_is_idempotent(s: String) -> bool {
          let once = ordered_list(&s);
          ordered_list(&once) == once
      }
  }
}
