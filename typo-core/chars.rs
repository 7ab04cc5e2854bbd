//! Character classification and char to byte offset conversion.
//!
//! Every offset the engine accepts from a host is a *character* offset. Rust
//! strings are indexed by byte, so all slicing goes through
//! [`char_to_byte_idx`].

use ropey::str_utils;

/// Horizontal whitespace; line endings are not included.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{180E}' | // Mongolian Vowel Separator
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad, Em Quad, En Space, Em Space, Three-per-em Space,
      // Four-per-em Space, Six-per-em Space, Figure Space,
      // Punctuation Space, Thin Space, Hair Space, Zero Width Space.
      ch if ('\u{2000}' ..= '\u{200B}').contains(&ch) => true,

      _ => false,
    }
}

/// Number of chars in `text`.
#[inline]
pub fn len_chars(text: &str) -> usize {
  str_utils::byte_to_char_idx(text, text.len())
}

/// Byte index of the char at `char_idx`. Past-the-end indices map to
/// `text.len()`.
#[inline]
pub fn char_to_byte_idx(text: &str, char_idx: usize) -> usize {
  str_utils::char_to_byte_idx(text, char_idx)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_char_offsets_are_not_byte_offsets() {
    let text = "Łódź is a city";
    assert_eq!(len_chars(text), 14);
    assert_eq!(text.len(), 17);
    assert_eq!(char_to_byte_idx(text, 4), 7);
    assert_eq!(&text[char_to_byte_idx(text, 5)..], "is a city");
  }

  #[test]
  fn test_char_to_byte_idx_past_end() {
    assert_eq!(char_to_byte_idx("abc", 3), 3);
    assert_eq!(char_to_byte_idx("abc", 10), 3);
    assert_eq!(char_to_byte_idx("", 1), 0);
  }

  #[test]
  fn test_whitespace_excludes_line_endings() {
    assert!(char_is_whitespace(' '));
    assert!(char_is_whitespace('\t'));
    assert!(char_is_whitespace('\u{00A0}'));
    assert!(!char_is_whitespace('\n'));
  }

  quickcheck::quickcheck! {
      fn len_chars_matches_iterator(s: String) -> bool {
          len_chars(&s) == s.chars().count()
      }
  }
}
