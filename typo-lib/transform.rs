//! The transform catalog and its dispatcher.
//!
//! Every [`Transform`] is a total function over text. Hosts usually pick one
//! from a menu (or the command line) by its kebab-case [`name`](Transform::name)
//! and call [`apply_transform`] on the whole document, or [`transform_range`]
//! on the current selection.

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::{
  ascii::remove_non_ascii,
  case_convention,
  list::{
    ordered_list,
    unordered_list,
  },
  rows::{
    SortOrder,
    merge_rows,
    remove_empty_rows,
    sort_text,
  },
  selection::{
    Range,
    splice,
  },
  words::{
    move_first_word_to_end,
    move_last_word_to_beginning,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
  SentenceCase,
  TitleCase,
  #[serde(rename = "uppercase")]
  UpperCase,
  #[serde(rename = "lowercase")]
  LowerCase,
  CamelCase,
  SnakeCase,
  KebabCase,
  UnorderedList,
  OrderedList,
  SortAsc,
  SortDesc,
  RemoveEmptyRows,
  RemoveNonAscii,
  MoveFirstWordToEnd,
  MoveLastWordToBeginning,
  MergeRows,
}

impl Transform {
  pub const ALL: [Transform; 16] = [
    Self::SentenceCase,
    Self::TitleCase,
    Self::UpperCase,
    Self::LowerCase,
    Self::CamelCase,
    Self::SnakeCase,
    Self::KebabCase,
    Self::UnorderedList,
    Self::OrderedList,
    Self::SortAsc,
    Self::SortDesc,
    Self::RemoveEmptyRows,
    Self::RemoveNonAscii,
    Self::MoveFirstWordToEnd,
    Self::MoveLastWordToBeginning,
    Self::MergeRows,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Self::SentenceCase => "sentence-case",
      Self::TitleCase => "title-case",
      Self::UpperCase => "uppercase",
      Self::LowerCase => "lowercase",
      Self::CamelCase => "camel-case",
      Self::SnakeCase => "snake-case",
      Self::KebabCase => "kebab-case",
      Self::UnorderedList => "unordered-list",
      Self::OrderedList => "ordered-list",
      Self::SortAsc => "sort-asc",
      Self::SortDesc => "sort-desc",
      Self::RemoveEmptyRows => "remove-empty-rows",
      Self::RemoveNonAscii => "remove-non-ascii",
      Self::MoveFirstWordToEnd => "move-first-word-to-end",
      Self::MoveLastWordToBeginning => "move-last-word-to-beginning",
      Self::MergeRows => "merge-rows",
    }
  }

  /// One-line description for menus and `--help` output.
  pub const fn doc(self) -> &'static str {
    match self {
      Self::SentenceCase => "Lowercase each line and capitalize its first letter",
      Self::TitleCase => "Capitalize every word",
      Self::UpperCase => "UPPERCASE everything",
      Self::LowerCase => "lowercase everything",
      Self::CamelCase => "camelCase each line",
      Self::SnakeCase => "snake_case each line",
      Self::KebabCase => "kebab-case each line",
      Self::UnorderedList => "Turn lines into a '- ' list",
      Self::OrderedList => "Turn lines into a numbered list",
      Self::SortAsc => "Sort lines A to Z, ignoring case",
      Self::SortDesc => "Sort lines Z to A, ignoring case",
      Self::RemoveEmptyRows => "Remove blank lines",
      Self::RemoveNonAscii => "Strip accents and non-ASCII characters",
      Self::MoveFirstWordToEnd => "Move the first word of each line to its end",
      Self::MoveLastWordToBeginning => "Move the last word of each line to its start",
      Self::MergeRows => "Join all lines into one",
    }
  }

  /// Whether the transform works line by line, keeping the line count.
  pub const fn is_per_line(self) -> bool {
    matches!(
      self,
      Self::SentenceCase
        | Self::CamelCase
        | Self::SnakeCase
        | Self::KebabCase
        | Self::MoveFirstWordToEnd
        | Self::MoveLastWordToBeginning
    )
  }
}

impl fmt::Display for Transform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown transform '{0}'")]
pub struct ParseTransformError(pub String);

impl FromStr for Transform {
  type Err = ParseTransformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|transform| transform.name() == s)
      .ok_or_else(|| ParseTransformError(s.to_string()))
  }
}

/// Runs `transform` over the whole of `text`.
pub fn apply_transform(text: &str, transform: Transform) -> String {
  tracing::trace!(%transform, len = text.len(), "applying transform");
  match transform {
    Transform::SentenceCase => case_convention::to_sentence_case(text),
    Transform::TitleCase => case_convention::to_title_case(text),
    Transform::UpperCase => case_convention::to_upper_case(text),
    Transform::LowerCase => case_convention::to_lower_case(text),
    Transform::CamelCase => case_convention::to_camel_case(text),
    Transform::SnakeCase => case_convention::to_snake_case(text),
    Transform::KebabCase => case_convention::to_kebab_case(text),
    Transform::UnorderedList => unordered_list(text),
    Transform::OrderedList => ordered_list(text),
    Transform::SortAsc => sort_text(text, SortOrder::Ascending),
    Transform::SortDesc => sort_text(text, SortOrder::Descending),
    Transform::RemoveEmptyRows => remove_empty_rows(text),
    Transform::RemoveNonAscii => remove_non_ascii(text),
    Transform::MoveFirstWordToEnd => move_first_word_to_end(text),
    Transform::MoveLastWordToBeginning => move_last_word_to_beginning(text),
    Transform::MergeRows => merge_rows(text),
  }
}

/// Runs `transform` over the part of `text` covered by `range` and splices
/// the result back.
pub fn transform_range(text: &str, range: Range, transform: Transform) -> String {
  splice(text, range, |selection| apply_transform(selection, transform))
}
