use std::{
  borrow::Cow,
  fs,
  io::{
    self,
    Read,
    Write,
  },
  path::Path,
};

use eyre::{
  Result,
  WrapErr,
};
use typo_core::line_ending::{
  LineEnding,
  normalize_line_endings,
  restore_line_endings,
  uniform_line_ending,
};
use typo_lib::{
  Pass,
  Range,
  SanitizeOptions,
  Transform,
  buffer::Buffer,
  sanitize,
  selection::{
    TextSource,
    resolve,
  },
  transform_range,
};
use typo_loader::config::Config;

use crate::cli::{
  Command,
  InputArgs,
};

/// A rewrite of the selected text.
#[derive(Debug, Clone, Copy)]
pub enum Edit {
  Transform(Transform),
  Sanitize(SanitizeOptions),
}

pub fn run(command: Command) -> Result<()> {
  match command {
    Command::Transform { transform, input } => edit_input(&input, Edit::Transform(transform)),
    Command::Sanitize { input, only, skip } => {
      let config = load_config()?;
      let options = effective_options(config.sanitize, &only, &skip);
      edit_input(&input, Edit::Sanitize(options))
    },
    Command::List => {
      let config = load_config()?;
      list(&mut io::stdout().lock(), &config.sanitize)?;
      Ok(())
    },
    Command::Toggle { pass } => {
      let mut config = load_config()?;
      let enabled = config.sanitize.toggle(pass);
      save_config(&config)?;
      println!("{pass}: {}", if enabled { "on" } else { "off" });
      Ok(())
    },
    Command::Set { key, value } => {
      let mut config = load_config()?;
      config
        .set(&key, &value)
        .wrap_err_with(|| format!("cannot set '{key}' to '{value}'"))?;
      save_config(&config)?;
      Ok(())
    },
  }
}

/// Applies `edit` to `source`, limited to `range` when given.
///
/// Input that uses CRLF throughout is edited as LF and written back with
/// CRLF; offsets in `range` then count each CRLF as one character. Input that
/// mixes CRLF and bare LF is edited as it is, carriage returns included, so
/// no line ending changes outside the edit.
pub fn edit_text(source: &str, range: Option<Range>, edit: Edit) -> Result<String> {
  let line_ending = uniform_line_ending(source).unwrap_or(LineEnding::LF);
  let text = match line_ending {
    LineEnding::Crlf => normalize_line_endings(source),
    LineEnding::LF => Cow::Borrowed(source),
  };
  let mut buffer = Buffer::new(&text);
  if let Some(range) = range {
    let range = range.checked(buffer.len_chars())?;
    buffer.select(range);
  }

  let target = resolve(&buffer);
  let edited = match edit {
    Edit::Transform(transform) => transform_range(&target.text, target.range, transform),
    Edit::Sanitize(options) => sanitize(&target.text, target.range, &options),
  };
  log::debug!(
    "{edit:?} over {}..{} of {} chars",
    target.range.from(),
    target.range.to(),
    buffer.len_chars()
  );
  buffer.replace_target(target.range, &edited);

  Ok(restore_line_endings(&buffer.text(), line_ending).into_owned())
}

/// The configured options, narrowed by `--only` and `--skip`.
pub fn effective_options(base: SanitizeOptions, only: &[Pass], skip: &[Pass]) -> SanitizeOptions {
  let mut options = base;
  if !only.is_empty() {
    for pass in Pass::ORDER {
      options.set(pass, only.contains(&pass));
    }
  }
  for pass in skip {
    options.set(*pass, false);
  }
  options
}

pub fn list(out: &mut impl Write, options: &SanitizeOptions) -> io::Result<()> {
  writeln!(out, "Transforms:")?;
  for transform in Transform::ALL {
    writeln!(out, "  {:<28} {}", transform.name(), transform.doc())?;
  }
  writeln!(out)?;
  writeln!(out, "Sanitization passes (in order):")?;
  for pass in Pass::ORDER {
    let mark = if options.is_enabled(pass) { 'x' } else { ' ' };
    writeln!(out, "  [{mark}] {pass}")?;
  }
  writeln!(
    out,
    "  tab-width = {}, tab-conversion = {:?}, punctuation-variant = {:?}",
    options.tab_width(),
    options.tab_conversion,
    options.punctuation_variant
  )
}

fn edit_input(input: &InputArgs, edit: Edit) -> Result<()> {
  let source = read_input(input.file.as_deref())?;
  let edited = edit_text(&source, input.range, edit)?;

  match &input.file {
    Some(path) if input.in_place => {
      fs::write(path, edited).wrap_err_with(|| format!("failed to write {}", path.display()))?;
      log::info!("rewrote {}", path.display());
    },
    _ => io::stdout().lock().write_all(edited.as_bytes())?,
  }
  Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
  match file {
    Some(path) => {
      fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
    },
    None => {
      let mut source = String::new();
      io::stdin()
        .read_to_string(&mut source)
        .wrap_err("failed to read stdin")?;
      Ok(source)
    },
  }
}

fn load_config() -> Result<Config> {
  let path = typo_loader::config_file();
  Config::load(&path).wrap_err_with(|| format!("failed to load {}", path.display()))
}

fn save_config(config: &Config) -> Result<()> {
  let path = typo_loader::config_file();
  config
    .save(&path)
    .wrap_err_with(|| format!("failed to save {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn transform_whole_input() {
    let out = edit_text("b\na\n", None, Edit::Transform(Transform::SortAsc)).unwrap();
    assert_eq!(out, "a\nb\n");
  }

  #[test]
  fn transform_range_keeps_surroundings() {
    let out = edit_text(
      "keep THIS part",
      Some(Range::new(5, 9)),
      Edit::Transform(Transform::LowerCase),
    )
    .unwrap();
    assert_eq!(out, "keep this part");
  }

  #[test]
  fn crlf_survives_editing() {
    let out = edit_text(
      "one\r\ntwo\r\n",
      None,
      Edit::Transform(Transform::UpperCase),
    )
    .unwrap();
    assert_eq!(out, "ONE\r\nTWO\r\n");
  }

  #[test]
  fn mixed_line_endings_are_kept() {
    let upper = Edit::Transform(Transform::UpperCase);
    assert_eq!(
      edit_text("one\ntwo\r\nthree\n", None, upper).unwrap(),
      "ONE\nTWO\r\nTHREE\n"
    );
    assert_eq!(
      edit_text("one\r\ntwo\nthree", Some(Range::new(5, 8)), upper).unwrap(),
      "one\r\nTWO\nthree"
    );
  }

  #[test]
  fn sanitize_with_narrowed_options() {
    let options = effective_options(
      SanitizeOptions::default(),
      &[Pass::Spaces, Pass::Punctuation, Pass::AddSpacesAfterPunctuation],
      &[],
    );
    let out = edit_text("Hello   world.,Next", None, Edit::Sanitize(options)).unwrap();
    assert_eq!(out, "Hello world., Next");
  }

  #[test]
  fn out_of_bounds_range_is_an_error() {
    let result = edit_text("short", Some(Range::new(2, 40)), Edit::Transform(Transform::UpperCase));
    assert!(result.is_err());
  }

  #[test]
  fn only_then_skip() {
    let options = effective_options(
      SanitizeOptions::default(),
      &[Pass::Spaces, Pass::Eol],
      &[Pass::Eol],
    );
    assert_eq!(options.enabled_passes().collect::<Vec<_>>(), vec![Pass::Spaces]);

    let options = effective_options(SanitizeOptions::default(), &[], &[Pass::Quotes]);
    assert!(!options.is_enabled(Pass::Quotes));
    assert!(options.is_enabled(Pass::Hyphens));
  }

  #[test]
  fn list_shows_ids_and_state() {
    let mut options = SanitizeOptions::default();
    options.toggle(Pass::Eol);
    let mut out = Vec::new();
    list(&mut out, &options).unwrap();
    let out = String::from_utf8(out).unwrap();

    for transform in Transform::ALL {
      assert!(out.contains(transform.name()), "{transform}");
    }
    assert!(out.contains("[x] hyphens"));
    assert!(out.contains("[ ] eol"));
  }
}
