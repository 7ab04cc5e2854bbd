//! Character ranges and the host/engine seam.
//!
//! A [`Range`] has two positions: `anchor` and `head`, both *character*
//! offsets. `from()` and `to()` return the ordered bounds regardless of
//! direction, so a backwards selection is as valid as a forward one:
//!
//! ```text
//! anchor=2, head=7: "he[llo w]orld"  (forward selection)
//! anchor=7, head=2: "he]llo w[orld"  (backward selection)
//! anchor=5, head=5: "hello|world"    (point, no selection)
//! ```
//!
//! Hosts describe their buffer through [`TextSource`]. [`resolve`] turns it
//! into a [`Target`]: the full text plus the range an operation applies to,
//! which is the whole document when nothing is selected.
//!
//! All range-scoped operations go through [`splice`], which rewrites
//! `text[from..to]` and leaves the prefix and suffix byte-for-byte intact.

use std::borrow::Cow;

use thiserror::Error;
use typo_core::chars::{
  char_to_byte_idx,
  len_chars,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
  #[error("range {from}..{to} out of bounds for text of {len} chars")]
  OutOfBounds { from: usize, to: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Forward,
  Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
  pub anchor: usize,
  pub head:   usize,
}

impl Range {
  pub fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  #[inline]
  pub fn point(head: usize) -> Self {
    Self::new(head, head)
  }

  /// The range covering all of `text`.
  pub fn whole(text: &str) -> Self {
    Self::new(0, len_chars(text))
  }

  /// Start of the range
  #[inline]
  #[must_use]
  pub fn from(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the range
  #[inline]
  #[must_use]
  pub fn to(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.to() - self.from()
  }

  /// When the head and anchor are in the same position, we have no range.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  pub fn contains(&self, pos: usize) -> bool {
    self.from() <= pos && pos < self.to()
  }

  #[inline]
  #[must_use]
  pub fn direction(&self) -> Direction {
    if self.head < self.anchor {
      Direction::Backward
    } else {
      Direction::Forward
    }
  }

  /// Flips the direction of the selection
  #[inline]
  #[must_use]
  pub fn flip(&self) -> Self {
    Self {
      anchor: self.head,
      head:   self.anchor,
    }
  }

  /// Returns the selection if we're going the same way as `direction`,
  /// else, flip it.
  #[inline]
  #[must_use]
  pub fn with_direction(self, direction: Direction) -> Self {
    if self.direction() == direction {
      self
    } else {
      self.flip()
    }
  }

  /// Clamps both ends into `0..=len`, keeping the direction.
  #[must_use]
  pub fn clamp(self, len: usize) -> Self {
    Self::new(self.anchor.min(len), self.head.min(len))
  }

  /// Returns the range unchanged if it fits a text of `len` chars.
  pub fn checked(self, len: usize) -> Result<Self, RangeError> {
    if self.to() <= len {
      Ok(self)
    } else {
      Err(RangeError::OutOfBounds {
        from: self.from(),
        to: self.to(),
        len,
      })
    }
  }

  /// Byte bounds of the range inside `text`, clamped to the text.
  pub fn byte_bounds(&self, text: &str) -> (usize, usize) {
    (
      char_to_byte_idx(text, self.from()),
      char_to_byte_idx(text, self.to()),
    )
  }
}

impl From<std::ops::Range<usize>> for Range {
  fn from(range: std::ops::Range<usize>) -> Self {
    Self::new(range.start, range.end)
  }
}

/// Rewrites the part of `text` covered by `range` with `f` and returns the
/// reassembled text. Out-of-range offsets are clamped.
pub fn splice<F>(text: &str, range: Range, f: F) -> String
where
  F: FnOnce(&str) -> String,
{
  let len = len_chars(text);
  if range.to() > len {
    tracing::warn!(
      from = range.from(),
      to = range.to(),
      len,
      "range exceeds text, clamping"
    );
  }
  let (start, end) = range.clamp(len).byte_bounds(text);
  let replacement = f(&text[start..end]);

  let mut out = String::with_capacity(start + replacement.len() + (text.len() - end));
  out.push_str(&text[..start]);
  out.push_str(&replacement);
  out.push_str(&text[end..]);
  out
}

/// Read access to a host buffer.
pub trait TextSource {
  /// The full text of the buffer.
  fn text(&self) -> Cow<'_, str>;

  /// The active selection, if any. An empty range counts as no selection.
  fn selection(&self) -> Option<Range>;
}

impl TextSource for str {
  fn text(&self) -> Cow<'_, str> {
    Cow::Borrowed(self)
  }

  fn selection(&self) -> Option<Range> {
    None
  }
}

impl TextSource for String {
  fn text(&self) -> Cow<'_, str> {
    Cow::Borrowed(self)
  }

  fn selection(&self) -> Option<Range> {
    None
  }
}

/// A text snapshot and the range an operation should apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
  pub text:  String,
  pub range: Range,
}

impl Target {
  /// Whether the range covers the whole text.
  pub fn is_whole(&self) -> bool {
    self.range.from() == 0 && self.range.to() == len_chars(&self.text)
  }
}

/// Resolves what an operation on `source` applies to: the current selection,
/// or the whole document when nothing is selected.
pub fn resolve<S>(source: &S) -> Target
where
  S: TextSource + ?Sized,
{
  let text = source.text().into_owned();
  let len = len_chars(&text);
  let range = match source.selection() {
    Some(range) if !range.is_empty() => range.clamp(len),
    _ => Range::new(0, len),
  };
  Target { text, range }
}
