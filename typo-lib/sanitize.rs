//! Range-scoped cleanup pipeline.
//!
//! [`sanitize`] cuts the selected range out of the document, runs the enabled
//! [`Pass`]es over it and splices the result back in. Passes always run in
//! [`Pass::ORDER`]; [`SanitizeOptions`] only decides which of them run.
//! Later passes rely on the earlier ones: the spaces pass cleans up what the
//! hyphen and punctuation passes insert, and the EOL pass expects the trailing
//! spaces to be gone.
//!
//! | Pass | Rewrites |
//! |------|----------|
//! | hyphens | `–` to `-`, `"word -word"` to `"word - word"` |
//! | quotes | `,,` `„` `”` to `"` |
//! | punctuation | `"word ,"` to `"word,"` |
//! | add-spaces-after-punctuation | `"a,b"` to `"a, b"` |
//! | spaces | space runs to one space, no spaces around line breaks |
//! | eol | exactly one blank line between text lines |

use std::{
  borrow::Cow,
  fmt,
  str::FromStr,
  sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;

use crate::{
  options::{
    PunctuationVariant,
    SanitizeOptions,
    TabConversion,
  },
  selection::{
    Range,
    splice,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
  Hyphens,
  Quotes,
  Punctuation,
  AddSpacesAfterPunctuation,
  Spaces,
  Eol,
}

impl Pass {
  /// The order passes run in.
  pub const ORDER: [Pass; 6] = [
    Self::Hyphens,
    Self::Quotes,
    Self::Punctuation,
    Self::AddSpacesAfterPunctuation,
    Self::Spaces,
    Self::Eol,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Self::Hyphens => "hyphens",
      Self::Quotes => "quotes",
      Self::Punctuation => "punctuation",
      Self::AddSpacesAfterPunctuation => "add-spaces-after-punctuation",
      Self::Spaces => "spaces",
      Self::Eol => "eol",
    }
  }

  /// Runs this pass over `text`, regardless of whether `options` enables it.
  /// `opens_line` tells whether `text` starts at the beginning of a line of
  /// the document it was cut from.
  pub fn apply(self, text: &str, opens_line: bool, options: &SanitizeOptions) -> String {
    match self {
      Self::Hyphens => hyphens(text, opens_line),
      Self::Quotes => quotes(text),
      Self::Punctuation => punctuation(text, options.punctuation_variant),
      Self::AddSpacesAfterPunctuation => add_spaces_after_punctuation(text),
      Self::Spaces => spaces(text, options.tab_conversion, options.tab_width()),
      Self::Eol => eol(text),
    }
  }
}

impl fmt::Display for Pass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sanitization pass '{0}'")]
pub struct ParsePassError(pub String);

impl FromStr for Pass {
  type Err = ParsePassError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ORDER
      .into_iter()
      .find(|pass| pass.name() == s)
      .ok_or_else(|| ParsePassError(s.to_string()))
  }
}

/// Runs the enabled passes over `text[range]` and returns the whole text with
/// the cleaned range spliced back in. Text outside `range` is not touched.
pub fn sanitize(text: &str, range: Range, options: &SanitizeOptions) -> String {
  let (start, _) = range.byte_bounds(text);
  let opens_line = start == 0 || text[..start].ends_with('\n');
  splice(text, range, |selection| {
    sanitize_selection(selection, opens_line, options)
  })
}

/// Runs the enabled passes over all of `text`, a selection that starts a line
/// when `opens_line` is set.
pub fn sanitize_selection(text: &str, opens_line: bool, options: &SanitizeOptions) -> String {
  options
    .enabled_passes()
    .fold(text.to_string(), |text, pass| {
      let out = pass.apply(&text, opens_line, options);
      tracing::trace!(%pass, before = text.len(), after = out.len(), "sanitize pass");
      out
    })
}

static HYPHEN_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ \t]*-+[ \t]*").expect("hyphen regex"));

/// Replaces en dashes with hyphens and puts exactly one space on each side of
/// a hyphen that already has a space on at least one side. Hyphens inside
/// words and hyphens opening a line are kept as they are; the start of `text`
/// counts as a line start only when `opens_line` is set.
pub fn hyphens(text: &str, opens_line: bool) -> String {
  let text = text.replace('–', "-");
  let mut out = String::with_capacity(text.len());
  let mut last = 0;
  for m in HYPHEN_RUN.find_iter(&text) {
    out.push_str(&text[last..m.start()]);
    let dashes = m.as_str().trim_matches([' ', '\t']);
    let spaced = dashes.len() != m.len();
    let at_line_start = if m.start() == 0 {
      opens_line
    } else {
      text[..m.start()].ends_with('\n')
    };
    if spaced && !at_line_start {
      out.push(' ');
      out.push_str(dashes);
      out.push(' ');
    } else {
      out.push_str(m.as_str());
    }
    last = m.end();
  }
  out.push_str(&text[last..]);
  out
}

/// `,,`, `„` and `”` become a straight double quote.
pub fn quotes(text: &str) -> String {
  text.replace(",,", "\"").replace(['„', '”'], "\"")
}

static SPACE_BEFORE_MARK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+([.,!?;:])").expect("punctuation regex"));

pub fn punctuation(text: &str, variant: PunctuationVariant) -> String {
  let text = SPACE_BEFORE_MARK.replace_all(text, "${1}");
  match variant {
    PunctuationVariant::Compact => text.into_owned(),
    PunctuationVariant::Legacy => text.replace(". ,", ".,").replace(". . .", "..."),
  }
}

static MARK_BEFORE_WORD: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"([.,!?;:])([A-Za-z0-9])").expect("mark spacing regex"));

/// Inserts a space after `. , ! ? ; :` when a letter or digit follows
/// directly.
pub fn add_spaces_after_punctuation(text: &str) -> String {
  MARK_BEFORE_WORD
    .replace_all(text, "${1} ${2}")
    .into_owned()
}

static SPACE_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r" {2,}").expect("space run regex"));
static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r" ?\n ?").expect("newline spacing regex"));

/// Collapses space runs, removes the space before and after a line break
/// and, with [`TabConversion::Spaces`], expands tabs.
pub fn spaces(text: &str, tabs: TabConversion, tab_width: usize) -> String {
  let text = SPACE_RUN.replace_all(text, " ");
  let text = SPACE_AROUND_NEWLINE.replace_all(&text, "\n");
  match tabs {
    TabConversion::Tabs => text.into_owned(),
    TabConversion::Spaces => expand_tabs(&text, tab_width).into_owned(),
  }
}

fn expand_tabs(text: &str, tab_width: usize) -> Cow<'_, str> {
  if text.contains('\t') {
    Cow::Owned(text.replace('\t', &" ".repeat(tab_width)))
  } else {
    Cow::Borrowed(text)
  }
}

static TRAILING_BLANKS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("trailing blank regex"));
static NEWLINE_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n{2,}").expect("newline run regex"));

/// Leaves exactly one blank line between any two lines of text: blanks before
/// a line break go, runs of line breaks collapse to one, then every line break
/// is doubled.
pub fn eol(text: &str) -> String {
  let text = TRAILING_BLANKS.replace_all(text, "\n");
  let text = NEWLINE_RUN.replace_all(&text, "\n");
  text.replace('\n', "\n\n")
}
