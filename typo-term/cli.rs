use std::path::{
  Path,
  PathBuf,
};

use clap::{
  ArgAction,
  Args,
  Parser,
  Subcommand,
};
use typo_lib::{
  Pass,
  Range,
  Transform,
};

#[derive(Parser, Debug)]
#[command(name = "typobuster", about, long_about = None, version)]
pub struct Cli {
  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count, global = true)]
  pub verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE", value_parser = parse_pathbuf, global = true)]
  pub log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE", value_parser = parse_pathbuf, global = true)]
  pub config_file: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Apply one transform (see `list` for the ids)
  Transform {
    #[arg(value_name = "ID")]
    transform: Transform,

    #[command(flatten)]
    input: InputArgs,
  },

  /// Run the enabled sanitization passes
  Sanitize {
    #[command(flatten)]
    input: InputArgs,

    /// Run only these passes
    #[arg(long, value_name = "PASS", value_delimiter = ',')]
    only: Vec<Pass>,

    /// Skip these passes
    #[arg(long, value_name = "PASS", value_delimiter = ',')]
    skip: Vec<Pass>,
  },

  /// List transform ids and sanitization passes
  List,

  /// Switch a sanitization pass on or off and save the config
  Toggle {
    #[arg(value_name = "PASS")]
    pass: Pass,
  },

  /// Set a sanitization option and save the config
  Set {
    #[arg(value_name = "KEY")]
    key:   String,
    #[arg(value_name = "VALUE")]
    value: String,
  },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
  /// File to read (stdin when omitted)
  #[arg(value_name = "FILE", value_parser = parse_pathbuf)]
  pub file: Option<PathBuf>,

  /// Only touch characters START..END (end-exclusive; in files that use
  /// CRLF throughout, each CRLF counts as one character)
  #[arg(long, value_name = "START..END", value_parser = parse_range)]
  pub range: Option<Range>,

  /// Overwrite FILE instead of writing to stdout
  #[arg(short = 'i', long, requires = "file")]
  pub in_place: bool,
}

fn parse_pathbuf(value: &str) -> Result<PathBuf, String> {
  Ok(typo_loader::expand_tilde(Path::new(value)).into_owned())
}

fn parse_range(value: &str) -> Result<Range, String> {
  let (start, end) = value
    .split_once("..")
    .ok_or_else(|| format!("expected START..END, got '{value}'"))?;
  let parse = |bound: &str| {
    bound
      .trim()
      .parse::<usize>()
      .map_err(|err| format!("bad offset '{bound}': {err}"))
  };
  let (start, end) = (parse(start)?, parse(end)?);
  if start > end {
    return Err(format!("range start {start} is after its end {end}"));
  }
  Ok(Range::new(start, end))
}
