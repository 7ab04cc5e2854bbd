use std::borrow::Cow;

use typo_core::lines::map_lines;

use crate::Tendril;

pub fn to_upper_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  to_upper_case_with(text.chars(), &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  to_lower_case_with(text.chars(), &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

/// Lowercases every line and uppercases its first character.
pub fn to_sentence_case(text: &str) -> String {
  map_lines(text, sentence_case_line)
}

fn sentence_case_line(line: &str) -> Cow<'_, str> {
  if line.is_empty() {
    return Cow::Borrowed(line);
  }
  let mut res = String::with_capacity(line.len());
  to_sentence_case_with(line.chars(), &mut res);
  Cow::Owned(res)
}

pub fn to_sentence_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.fold(true, |first, c| {
    if first {
      buf.extend(c.to_uppercase());
    } else {
      buf.extend(c.to_lowercase());
    }
    false
  });
}

/// Capitalizes every whitespace separated word of the whole text and joins
/// the words with single spaces. Line breaks are not kept.
pub fn to_title_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  for (idx, word) in text.split_whitespace().enumerate() {
    if idx > 0 {
      res.push(' ');
    }
    res.push_str(&capitalize(word));
  }
  res
}

/// First char uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> Tendril {
  let mut res = Tendril::new();
  word.chars().fold(true, |first, c| {
    if first {
      res.extend(c.to_uppercase());
    } else {
      res.extend(c.to_lowercase());
    }
    false
  });
  res
}

/// Per line: title case the words, drop the whitespace between them and
/// lowercase the very first character.
pub fn to_camel_case(text: &str) -> String {
  map_lines(text, camel_case_line)
}

fn camel_case_line(line: &str) -> Cow<'_, str> {
  if line.is_empty() {
    return Cow::Borrowed(line);
  }
  let mut res = String::with_capacity(line.len());
  to_camel_case_with(line.split_whitespace(), &mut res);
  Cow::Owned(res)
}

pub fn to_camel_case_with<'a>(words: impl Iterator<Item = &'a str>, buf: &mut String) {
  words.fold(true, |first_word, word| {
    let word = capitalize(word);
    if first_word {
      let mut chars = word.chars();
      if let Some(c) = chars.next() {
        buf.extend(c.to_lowercase());
      }
      buf.extend(chars);
    } else {
      buf.push_str(&word);
    }
    false
  });
}

pub fn to_snake_case(text: &str) -> String {
  map_lines(text, |line| Cow::Owned(to_separated_case(line, '_')))
}

pub fn to_kebab_case(text: &str) -> String {
  map_lines(text, |line| Cow::Owned(to_separated_case(line, '-')))
}

/// Shared implementation for snake_case and kebab-case: lowercase, with every
/// space replaced by `sep`.
fn to_separated_case(line: &str, sep: char) -> String {
  let mut res = String::with_capacity(line.len());
  for c in line.chars() {
    if c == ' ' {
      res.push(sep);
    } else {
      res.extend(c.to_lowercase());
    }
  }
  res
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_to_upper_case() {
    assert_eq!(to_upper_case("hello"), "HELLO");
    assert_eq!(to_upper_case("Hello World"), "HELLO WORLD");
    assert_eq!(to_upper_case("ALREADY"), "ALREADY");
    assert_eq!(to_upper_case(""), "");
    assert_eq!(to_upper_case("café"), "CAFÉ");
  }

  #[test]
  fn test_to_lower_case() {
    assert_eq!(to_lower_case("HELLO"), "hello");
    assert_eq!(to_lower_case("Hello World"), "hello world");
    assert_eq!(to_lower_case("already"), "already");
    assert_eq!(to_lower_case(""), "");
    assert_eq!(to_lower_case("CAFÉ"), "café");
  }

  #[test]
  fn test_to_sentence_case() {
    assert_eq!(to_sentence_case("hELLO wORLD"), "Hello world");
    assert_eq!(to_sentence_case("ONE\ntwo"), "One\nTwo");
    assert_eq!(to_sentence_case("first\n\nthird"), "First\n\nThird");
    assert_eq!(to_sentence_case(""), "");
    assert_eq!(to_sentence_case("\n"), "\n");
    // Leading whitespace is the "first character".
    assert_eq!(to_sentence_case(" abc"), " abc");
    assert_eq!(to_sentence_case("élan"), "Élan");
  }

  #[test]
  fn test_to_title_case() {
    assert_eq!(to_title_case("hello wORLD"), "Hello World");
    assert_eq!(to_title_case("  many   spaces  "), "Many Spaces");
    assert_eq!(to_title_case("across\nlines"), "Across Lines");
    assert_eq!(to_title_case(""), "");
  }

  #[test]
  fn test_to_camel_case() {
    assert_eq!(to_camel_case("hello world"), "helloWorld");
    assert_eq!(to_camel_case("Hello Big WORLD"), "helloBigWorld");
    assert_eq!(to_camel_case("one line\nTwo Lines"), "oneLine\ntwoLines");
    assert_eq!(to_camel_case("a\n\nb"), "a\n\nb");
    assert_eq!(to_camel_case(""), "");
    assert_eq!(to_camel_case("   "), "");
  }

  #[test]
  fn test_to_snake_case() {
    assert_eq!(to_snake_case("Hello World"), "hello_world");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
    assert_eq!(to_snake_case("two  spaces"), "two__spaces");
    assert_eq!(to_snake_case("A b\nC d"), "a_b\nc_d");
    assert_eq!(to_snake_case(""), "");
  }

  #[test]
  fn test_to_kebab_case() {
    assert_eq!(to_kebab_case("Hello World"), "hello-world");
    assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    assert_eq!(to_kebab_case("A b\nC d"), "a-b\nc-d");
    assert_eq!(to_kebab_case(""), "");
  }

  #[test]
  fn test_capitalize() {
    assert_eq!(capitalize("wORD").as_str(), "Word");
    assert_eq!(capitalize("").as_str(), "");
    assert_eq!(capitalize("ß").as_str(), "SS");
  }

  quickcheck::quickcheck! {
      fn upper_case_is_idempotent(s: String) -> bool {
          let once = to_upper_case(&s);
          to_upper_case(&once) == once
      }

      fn lower_case_is_idempotent(s: String) -> bool {
          let once = to_lower_case(&s);
          to_lower_case(&once) == once
      }
  }
}
