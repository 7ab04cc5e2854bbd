//! Whole-row operations: sorting, blank row removal and merging.

use std::cmp::Reverse;

use typo_core::lines::{
  join_lines,
  non_blank_lines,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  Ascending,
  Descending,
}

/// Sorts `lines` case-insensitively. The sort is stable in both directions:
/// lines with equal lowercase keys keep their original order.
pub fn sort_lines<S: AsRef<str>>(lines: &mut [S], order: SortOrder) {
  match order {
    SortOrder::Ascending => lines.sort_by_cached_key(|line| line.as_ref().to_lowercase()),
    SortOrder::Descending => {
      lines.sort_by_cached_key(|line| Reverse(line.as_ref().to_lowercase()))
    },
  }
}

/// Sorts the lines of `text`. A single trailing newline stays at the end
/// instead of sorting to the top as an empty line.
pub fn sort_text(text: &str, order: SortOrder) -> String {
  let (body, trailing) = match text.strip_suffix('\n') {
    Some(body) => (body, "\n"),
    None => (text, ""),
  };
  let mut lines: Vec<&str> = body.split('\n').collect();
  sort_lines(&mut lines, order);
  let mut res = join_lines(lines);
  res.push_str(trailing);
  res
}

/// Keeps only lines that contain something other than whitespace.
pub fn remove_empty_rows(text: &str) -> String {
  join_lines(non_blank_lines(text))
}

/// Joins all rows into one: each line is trimmed, blank lines are dropped
/// and the rest are separated by a single space.
pub fn merge_rows(text: &str) -> String {
  non_blank_lines(text)
    .map(str::trim)
    .collect::<Vec<_>>()
    .join(" ")
}
