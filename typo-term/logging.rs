//! Log setup for the binary.
//!
//! The libraries emit `tracing` events, which reach this dispatcher through
//! `tracing`'s `log` bridge. Everything at the chosen level goes to the log
//! file; warnings are echoed to stderr as well.

use std::path::Path;

use eyre::{
  Result,
  WrapErr,
};
use log::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
  match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

pub fn setup_logging(verbosity: u8, log_file: &Path) -> Result<()> {
  let file = fern::log_file(log_file)
    .wrap_err_with(|| format!("failed to open log file {}", log_file.display()))?;

  let file_config = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .chain(file);

  let stderr_config = fern::Dispatch::new()
    .level(LevelFilter::Warn)
    .format(|out, message, record| {
      out.finish(format_args!("typobuster: {}: {}", record.level(), message))
    })
    .chain(std::io::stderr());

  fern::Dispatch::new()
    .level(level_for(verbosity))
    .chain(file_config)
    .chain(stderr_config)
    .apply()
    .wrap_err("a logger is already installed")?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verbosity_raises_level() {
    assert_eq!(level_for(0), LevelFilter::Warn);
    assert_eq!(level_for(1), LevelFilter::Info);
    assert_eq!(level_for(2), LevelFilter::Debug);
    assert_eq!(level_for(9), LevelFilter::Trace);
  }
}
