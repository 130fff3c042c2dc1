#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::{Builder, TempDir};

/// Isolated working directory plus XDG config home for a single test.
#[derive(Debug)]
pub struct TestEnv {
  workdir: TempDir,
  xdg_home: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let root = tmp_root();
    let workdir = Builder::new()
      .prefix("diary-test-")
      .tempdir_in(&root)
      .expect("temp workdir");
    let xdg_home = Builder::new()
      .prefix("diary-xdg-")
      .tempdir_in(&root)
      .expect("temp xdg home");
    Self { workdir, xdg_home }
  }

  pub fn path(&self) -> &Path {
    self.workdir.path()
  }

  pub fn xdg_home_dir(&self) -> &Path {
    self.xdg_home.path()
  }

  /// Write `diary/diary.json` below the test's XDG config home.
  pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
    let dir = self.xdg_home_dir().join("diary");
    fs::create_dir_all(&dir)?;
    let path = dir.join("diary.json");
    fs::write(&path, contents)?;
    Ok(path)
  }

  /// The `diary` binary, running inside the workdir with an isolated config home.
  pub fn diary(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("diary")?;
    cmd
      .current_dir(self.path())
      .env("XDG_CONFIG_HOME", self.xdg_home_dir())
      .env("HOME", self.xdg_home_dir())
      .env_remove("RUST_LOG");
    Ok(cmd)
  }
}

/// Return the single `*.md` diary file in `dir` and its contents.
pub fn read_single_diary(dir: &Path) -> Result<(PathBuf, String)> {
  let mut files: Vec<PathBuf> = fs::read_dir(dir)
    .with_context(|| format!("failed to list {}", dir.display()))?
    .filter_map(|entry| entry.ok().map(|e| e.path()))
    .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
    .collect();
  anyhow::ensure!(
    files.len() == 1,
    "expected one diary file in {}, found {}",
    dir.display(),
    files.len()
  );
  let path = files.remove(0);
  let contents = fs::read_to_string(&path)?;
  Ok((path, contents))
}

pub fn tmp_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/diary -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|p| p.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = fs::create_dir_all(&root);
  root
}
