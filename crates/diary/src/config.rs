use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "diary";
const CONFIG_FILE_NAME: &str = "diary.json";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid JSON in {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// Persisted user preferences. Unknown keys in the file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiaryConfig {
  /// Directory that receives the daily files when `--dir` is not given.
  #[serde(default)]
  pub dir: Option<String>,
}

impl DiaryConfig {
  /// Configured directory, treating an empty string as unset.
  #[must_use]
  pub fn dir(&self) -> Option<&str> {
    self.dir.as_deref().filter(|d| !d.is_empty())
  }
}

/// Resolve the global config file path (`$XDG_CONFIG_HOME/diary/diary.json`).
///
/// Returns `None` when no config home can be determined.
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
  let xdg = xdg::BaseDirectories::with_prefix(CONFIG_DIR_NAME);
  let config_home = xdg.get_config_home()?;
  Some(config_home.join(CONFIG_FILE_NAME))
}

/// Load the per-user configuration.
///
/// A missing file (or an unresolvable config home) yields the empty config.
///
/// # Errors
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<DiaryConfig, ConfigError> {
  match global_config_path() {
    Some(path) => load_config_from(&path),
    None => {
      debug!("no config home available, using empty config");
      Ok(DiaryConfig::default())
    }
  }
}

/// Load configuration from an explicit path.
///
/// # Errors
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<DiaryConfig, ConfigError> {
  let data = match fs::read_to_string(path) {
    Ok(data) => data,
    Err(err) if err.kind() == ErrorKind::NotFound => {
      debug!("no config at {}", path.display());
      return Ok(DiaryConfig::default());
    }
    Err(source) => {
      return Err(ConfigError::Read {
        path: path.to_path_buf(),
        source,
      });
    }
  };
  let cfg: DiaryConfig = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })?;
  debug!("loaded config from {}: {cfg:?}", path.display());
  Ok(cfg)
}
