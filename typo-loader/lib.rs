pub mod config;

use std::{
  borrow::Cow,
  path::{
    Path,
    PathBuf,
  },
  sync::OnceLock,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

pub const APP_NAME: &str = "typobuster";

static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

pub fn initialize_config_file(specified_file: Option<PathBuf>) {
  let config_file = specified_file.unwrap_or_else(default_config_file);
  ensure_parent_dir(&config_file);
  CONFIG_FILE.set(config_file).ok();
}

pub fn initialize_log_file(specified_file: Option<PathBuf>) {
  let log_file = specified_file.unwrap_or_else(default_log_file);
  ensure_parent_dir(&log_file);
  LOG_FILE.set(log_file).ok();
}

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> Cow<'_, Path> {
  let mut components = path.components();
  if let Some(std::path::Component::Normal(first)) = components.next()
    && first == "~"
    && let Ok(home) = etcetera::home_dir()
  {
    return Cow::Owned(home.join(components.as_path()));
  }
  Cow::Borrowed(path)
}

pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var("TYPOBUSTER_CONFIG_DIR") {
    return expand_tilde(Path::new(&dir)).into_owned();
  }
  let mut path = match choose_base_strategy() {
    Ok(strategy) => strategy.config_dir(),
    Err(err) => {
      tracing::warn!(%err, "unable to find the config directory, using the working directory");
      PathBuf::from(".")
    },
  };
  path.push(APP_NAME);
  path
}

pub fn cache_dir() -> PathBuf {
  if let Ok(dir) = std::env::var("TYPOBUSTER_CACHE_DIR") {
    return expand_tilde(Path::new(&dir)).into_owned();
  }
  let mut path = match choose_base_strategy() {
    Ok(strategy) => strategy.cache_dir(),
    Err(err) => {
      tracing::warn!(%err, "unable to find the cache directory, using the temp directory");
      std::env::temp_dir()
    },
  };
  path.push(APP_NAME);
  path
}

pub fn config_file() -> PathBuf {
  CONFIG_FILE
    .get_or_init(|| {
      let path = default_config_file();
      ensure_parent_dir(&path);
      path
    })
    .clone()
}

pub fn log_file() -> PathBuf {
  LOG_FILE
    .get_or_init(|| {
      let path = default_log_file();
      ensure_parent_dir(&path);
      path
    })
    .clone()
}

pub fn default_log_file() -> PathBuf {
  cache_dir().join("typobuster.log")
}

/// Merge two TOML documents, merging values from `right` onto `left`
///
/// `merge_depth` sets the nesting depth up to which values are merged instead
/// of overridden.
///
/// When a table exists in both `left` and `right`, the merged table consists of
/// all keys in `left`'s table unioned with all keys in `right` with the values
/// of `right` being merged recursively onto values of `left`.
///
/// `crate::merge_toml_values(defaults, user, 3)` combines, for example:
///
/// defaults:
/// ```toml
/// [sanitize]
/// hyphens = true
/// eol = true
/// ```
/// user:
/// ```toml
/// [sanitize]
/// eol = false
/// ```
///
/// into:
/// ```toml
/// [sanitize]
/// hyphens = true
/// eol = false
/// ```
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) => {
      if merge_depth > 0 {
        for (rname, rvalue) in right_map {
          match left_map.remove(&rname) {
            Some(lvalue) => {
              let merged_value = merge_toml_values(lvalue, rvalue, merge_depth - 1);
              left_map.insert(rname, merged_value);
            },
            None => {
              left_map.insert(rname, rvalue);
            },
          }
        }
        Value::Table(left_map)
      } else {
        Value::Table(right_map)
      }
    },
    // Catch everything else we didn't handle, and use the right value
    (_, value) => value,
  }
}

fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}

pub(crate) fn ensure_parent_dir(path: &Path) {
  if let Some(parent) = path.parent()
    && !parent.exists()
  {
    std::fs::create_dir_all(parent).ok();
  }
}
