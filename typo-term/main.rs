//! Command-line host for the typobuster text engine.
//!
//! Reads a document from a file or stdin, applies a transform or the
//! sanitization pipeline to it (or to a character range of it) and writes the
//! result to stdout or back to the file. Pass settings are kept in the config
//! file managed by `typo-loader`.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use eyre::{
  Result,
  WrapErr,
};

use crate::cli::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse();

  typo_loader::initialize_config_file(cli.config_file.clone());
  typo_loader::initialize_log_file(cli.log_file.clone());
  logging::setup_logging(cli.verbosity, &typo_loader::log_file())
    .wrap_err("failed to set up logging")?;

  log::debug!("config file: {}", typo_loader::config_file().display());
  commands::run(cli.command)
}
