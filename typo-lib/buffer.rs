//! A minimal host buffer.
//!
//! [`Buffer`] is what a host keeps between engine calls: the document text
//! and the user's selection. The engine itself never sees it; hosts
//! [`resolve`](crate::selection::resolve) it into a snapshot, run a transform
//! or the sanitizer, then hand the result back through
//! [`Buffer::replace_target`].

use std::borrow::Cow;

use ropey::Rope;
use typo_core::chars::len_chars;

use crate::selection::{
  Range,
  TextSource,
};

#[derive(Debug, Clone, Default)]
pub struct Buffer {
  text:      Rope,
  selection: Option<Range>,
}

impl Buffer {
  pub fn new(text: &str) -> Self {
    Self {
      text:      Rope::from_str(text),
      selection: None,
    }
  }

  pub fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  /// Selects `range`, clamped to the buffer. An empty range clears the
  /// selection.
  pub fn select(&mut self, range: Range) {
    let range = range.clamp(self.len_chars());
    self.selection = (!range.is_empty()).then_some(range);
  }

  /// Replaces the whole buffer with `new_text`, the result of rewriting
  /// `target` (a range of the previous contents).
  ///
  /// The rewritten region is selected again so a follow-up operation applies
  /// to the same text. When `target` covered the whole document the
  /// selection is cleared instead.
  pub fn replace_target(&mut self, target: Range, new_text: &str) {
    let old_len = self.len_chars();
    let target = target.clamp(old_len);
    let whole = target.from() == 0 && target.to() == old_len;

    let new_len = len_chars(new_text);
    self.text = Rope::from_str(new_text);
    self.selection = if whole {
      None
    } else {
      // The suffix after `target` is untouched, so the rewritten region ends
      // where that suffix now starts.
      let suffix = old_len - target.to();
      let end = new_len.saturating_sub(suffix).max(target.from());
      let range = Range::new(target.from(), end).with_direction(target.direction());
      (!range.is_empty()).then_some(range)
    };
  }
}

impl TextSource for Buffer {
  fn text(&self) -> Cow<'_, str> {
    Cow::from(self.text.slice(..))
  }

  fn selection(&self) -> Option<Range> {
    self.selection
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::selection::resolve;

  #[test]
  fn test_select_clamps_and_clears() {
    let mut buffer = Buffer::new("hello");
    buffer.select(Range::new(1, 40));
    assert_eq!(buffer.selection(), Some(Range::new(1, 5)));
    buffer.select(Range::point(2));
    assert_eq!(buffer.selection(), None);
  }

  #[test]
  fn test_replace_target_reselects_rewritten_region() {
    let mut buffer = Buffer::new("keep this   text keep");
    buffer.select(Range::new(5, 17));
    let target = resolve(&buffer);
    assert_eq!(target.range, Range::new(5, 17));

    buffer.replace_target(target.range, "keep this text keep");
    assert_eq!(buffer.text(), "keep this text keep");
    assert_eq!(buffer.selection(), Some(Range::new(5, 15)));
  }

  #[test]
  fn test_replace_whole_document_clears_selection() {
    let mut buffer = Buffer::new("abc");
    let target = resolve(&buffer);
    buffer.replace_target(target.range, "ABC");
    assert_eq!(buffer.text(), "ABC");
    assert_eq!(buffer.selection(), None);
  }

  #[test]
  fn test_replace_keeps_backward_direction() {
    let mut buffer = Buffer::new("a bb c");
    buffer.select(Range::new(4, 2));
    buffer.replace_target(Range::new(4, 2), "a BBBB c");
    assert_eq!(buffer.selection(), Some(Range::new(6, 2)));
  }
}
