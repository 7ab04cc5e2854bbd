use unicode_normalization::UnicodeNormalization;

/// Letters with no canonical decomposition that still have an obvious Latin
/// counterpart.
fn transliterate(c: char) -> char {
  match c {
    'Ł' => 'L',
    'ł' => 'l',
    c => c,
  }
}

/// Decomposes `text` (NFD) and drops everything outside ASCII, so accented
/// letters lose their combining marks and keep the base letter.
pub fn remove_non_ascii(text: &str) -> String {
  text
    .nfd()
    .map(transliterate)
    .filter(char::is_ascii)
    .collect()
}
