use std::path::PathBuf;

use anyhow::Result;

use crate::config::DiaryConfig;
use crate::entry::append_entry;
use crate::log_info;
use crate::utils::dir::{DEFAULT_DIR, resolve_dir};
use crate::utils::log::t;

/// Append `message` to today's file in the directory chosen by `--dir`, config, or default.
pub fn run(cfg: &DiaryConfig, dir: Option<&str>, message: &str) -> Result<PathBuf> {
  let dir = resolve_dir(dir, cfg.dir(), DEFAULT_DIR);

  let path = append_entry(&dir, message)?;
  log_info!("Appended to {}", t::path(path.display()));
  Ok(path)
}
