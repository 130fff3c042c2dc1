use std::path::PathBuf;

use log::debug;

/// Directory used when neither `--dir` nor the config provide one.
pub const DEFAULT_DIR: &str = ".";

/// Resolve the diary directory with precedence: `--dir` -> config `dir` -> `default_dir`.
///
/// `cli_dir` is `None` when the flag was not passed. Empty strings count as
/// unset at every tier.
#[must_use]
pub fn resolve_dir(cli_dir: Option<&str>, config_dir: Option<&str>, default_dir: &str) -> PathBuf {
  if let Some(dir) = cli_dir
    && !dir.is_empty()
  {
    debug!("diary directory {dir} from --dir");
    return PathBuf::from(dir);
  }
  if let Some(dir) = config_dir
    && !dir.is_empty()
  {
    debug!("diary directory {dir} from config");
    return PathBuf::from(dir);
  }
  debug!("diary directory {default_dir} (default)");
  PathBuf::from(default_dir)
}
