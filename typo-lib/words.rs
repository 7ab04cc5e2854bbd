//! Per-line word reordering.
//!
//! Leading indentation is kept in place and trailing whitespace is dropped;
//! a line with a single word is returned untouched.

use std::borrow::Cow;

use typo_core::{
  chars::char_is_whitespace,
  lines::map_lines,
};

/// `"hello big world"` becomes `"big world hello"`.
pub fn move_first_word_to_end(text: &str) -> String {
  map_lines(text, first_word_to_end)
}

/// `"hello big world"` becomes `"world hello big"`.
pub fn move_last_word_to_beginning(text: &str) -> String {
  map_lines(text, last_word_to_beginning)
}

/// Splits `line` into its indentation and its body without trailing
/// whitespace.
fn split_indent(line: &str) -> (&str, &str) {
  let body = line.trim_start_matches(char_is_whitespace);
  let indent = &line[..line.len() - body.len()];
  (indent, body.trim_end_matches(char_is_whitespace))
}

fn first_word_to_end(line: &str) -> Cow<'_, str> {
  let (indent, body) = split_indent(line);
  let Some(split) = body.find(char_is_whitespace) else {
    return Cow::Borrowed(line);
  };
  let first = &body[..split];
  let rest = body[split..].trim_start_matches(char_is_whitespace);
  Cow::Owned(format!("{indent}{rest} {first}"))
}

fn last_word_to_beginning(line: &str) -> Cow<'_, str> {
  let (indent, body) = split_indent(line);
  let Some((split, ws)) = body
    .char_indices()
    .rev()
    .find(|&(_, c)| char_is_whitespace(c))
  else {
    return Cow::Borrowed(line);
  };
  let last = &body[split + ws.len_utf8()..];
  let rest = body[..split].trim_end_matches(char_is_whitespace);
  Cow::Owned(format!("{indent}{last} {rest}"))
}
