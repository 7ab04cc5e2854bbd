//! The settings repository.
//!
//! Settings live in `config.toml`:
//!
//! ```toml
//! [sanitize]
//! hyphens = true
//! quotes = true
//! punctuation = true
//! add-spaces-after-punctuation = true
//! spaces = true
//! eol = true
//! tab-width = 4
//! tab-conversion = "tabs"
//! punctuation-variant = "compact"
//! ```
//!
//! Reading always merges the file onto the defaults. When the file lacks
//! keys, uses the old flat `sanitize-*` key names, or does not exist yet, the
//! completed settings are written back so the file on disk lists every
//! option. Settings from the old JSON file are imported the first time.

use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;
use toml::Value;
use typo_lib::SanitizeOptions;

use crate::{
  ensure_parent_dir,
  merge_toml_values,
};

/// Old flat key names and the `[sanitize]` keys they became.
const LEGACY_KEYS: [(&str, &str); 5] = [
  ("sanitize-hyphens", "hyphens"),
  ("sanitize-quotes", "quotes"),
  ("sanitize-punctuation-marks", "punctuation"),
  ("sanitize-spaces", "spaces"),
  ("sanitize-eol", "eol"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
  pub sanitize: SanitizeOptions,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
  #[error("failed to access {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("bad config: {0}")]
  BadConfig(#[from] toml::de::Error),
  #[error("failed to serialize config: {0}")]
  Serialize(#[from] toml::ser::Error),
  #[error("bad legacy settings: {0}")]
  BadLegacy(#[from] serde_json::Error),
}

/// Outcome of parsing a config document.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
  pub config:   Config,
  /// The document was incomplete or used old key names and should be
  /// written back.
  pub migrated: bool,
}

impl Config {
  pub fn defaults_value() -> Result<Value, ConfigLoadError> {
    Ok(Value::try_from(Config::default())?)
  }

  /// Parses a config document, filling in defaults for missing keys.
  pub fn parse(source: &str) -> Result<Loaded, ConfigLoadError> {
    let mut user: Value = toml::from_str(source)?;
    let renamed = migrate_legacy_keys(&mut user);
    let merged = merge_toml_values(Self::defaults_value()?, user.clone(), 3);
    let migrated = renamed || merged != user;
    let config = merged.try_into()?;
    Ok(Loaded { config, migrated })
  }

  /// Loads the config at `path`.
  ///
  /// A missing file is created from the old JSON settings next to it if
  /// there are any, or from the defaults. An incomplete file is completed on
  /// disk. Failing to write back is logged, not returned.
  pub fn load(path: &Path) -> Result<Config, ConfigLoadError> {
    let (config, write_back) = match fs::read_to_string(path) {
      Ok(source) => {
        let loaded = Self::parse(&source)?;
        (loaded.config, loaded.migrated)
      },
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        let legacy = path.with_file_name("config");
        match import_legacy(&legacy)? {
          Some(config) => {
            tracing::info!("imported settings from {}", legacy.display());
            (config, true)
          },
          None => (Config::default(), true),
        }
      },
      Err(source) => {
        return Err(ConfigLoadError::Io {
          path: path.to_path_buf(),
          source,
        });
      },
    };

    if write_back {
      match config.save(path) {
        Ok(()) => tracing::info!("updated settings in {}", path.display()),
        Err(err) => tracing::warn!(%err, "failed to update settings"),
      }
    }
    Ok(config)
  }

  /// Sets one `[sanitize]` option from its textual form, as typed on a
  /// command line. `key` may carry a `sanitize.` prefix or use an old key
  /// name. The whole config is revalidated, so unknown keys and ill-typed
  /// values are rejected and leave `self` unchanged.
  pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigLoadError> {
    let key = key.strip_prefix("sanitize.").unwrap_or(key);
    let key = LEGACY_KEYS
      .iter()
      .find_map(|(legacy, new)| (*legacy == key).then_some(*new))
      .unwrap_or(key);

    let mut doc = Value::try_from(*self)?;
    if let Some(sanitize) = doc.get_mut("sanitize").and_then(Value::as_table_mut) {
      sanitize.insert(key.to_string(), parse_scalar(value));
    }
    *self = doc.try_into()?;
    tracing::debug!(key, value, "set option");
    Ok(())
  }

  pub fn save(&self, path: &Path) -> Result<(), ConfigLoadError> {
    ensure_parent_dir(path);
    let source = toml::to_string_pretty(self)?;
    fs::write(path, source).map_err(|source| {
      ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    tracing::debug!("saved settings to {}", path.display());
    Ok(())
  }
}

/// Moves old flat `sanitize-*` keys into the `[sanitize]` table under their
/// new names. Returns whether anything was moved.
fn migrate_legacy_keys(doc: &mut Value) -> bool {
  let Some(root) = doc.as_table_mut() else {
    return false;
  };

  let mut moved = Vec::new();
  for (legacy, key) in LEGACY_KEYS {
    if let Some(value) = root.remove(legacy) {
      moved.push((key, value));
    }
  }
  if let Some(sanitize) = root
    .get_mut("sanitize")
    .and_then(Value::as_table_mut)
  {
    for (legacy, key) in LEGACY_KEYS {
      if let Some(value) = sanitize.remove(legacy) {
        moved.push((key, value));
      }
    }
  }
  if moved.is_empty() {
    return false;
  }

  let sanitize = root
    .entry("sanitize")
    .or_insert_with(|| Value::Table(Default::default()));
  if let Some(sanitize) = sanitize.as_table_mut() {
    for (key, value) in moved {
      // An explicit new-style key wins over its old spelling.
      sanitize.entry(key).or_insert(value);
    }
  }
  true
}

fn parse_scalar(value: &str) -> Value {
  value
    .parse::<bool>()
    .map(Value::Boolean)
    .or_else(|_| value.parse::<i64>().map(Value::Integer))
    .unwrap_or_else(|_| Value::String(value.to_string()))
}

/// Reads the old JSON settings file, if there is one.
fn import_legacy(path: &Path) -> Result<Option<Config>, ConfigLoadError> {
  let source = match fs::read_to_string(path) {
    Ok(source) => source,
    Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(source) => {
      return Err(ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
      });
    },
  };

  let json: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&source)?;
  let mut config = Config::default();
  for (legacy, key) in LEGACY_KEYS {
    let Some(enabled) = json.get(legacy).and_then(serde_json::Value::as_bool) else {
      continue;
    };
    if let Ok(pass) = key.parse() {
      config.sanitize.set(pass, enabled);
    }
  }
  Ok(Some(config))
}
