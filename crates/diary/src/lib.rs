use anyhow::Result;
use clap::{CommandFactory as _, Parser};

pub mod commands;
pub mod config;
pub mod entry;
pub mod utils;

use crate::config::{DiaryConfig, load_config};
use crate::utils::error_messages;

/// Diary - Append a timestamped note to today's diary file (YYYY-MM-DD.md).
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Directory to save diary files (default: current directory, or `dir` from diary.json)
  #[arg(long, value_name = "PATH")]
  dir: Option<String>,

  /// Text to append; remaining arguments are joined with single spaces
  #[arg(value_name = "TEXT", trailing_var_arg = true)]
  text: Vec<String>,
}

impl Cli {
  /// The message to write, or `None` when no text was given.
  #[must_use]
  pub fn message(&self) -> Option<String> {
    if self.text.is_empty() {
      None
    } else {
      Some(self.text.join(" "))
    }
  }

  #[must_use]
  pub fn dir(&self) -> Option<&str> {
    self.dir.as_deref()
  }
}

/// Load the config, downgrading any failure to a warning.
fn load_config_or_warn() -> DiaryConfig {
  match load_config() {
    Ok(cfg) => cfg,
    Err(err) => {
      crate::log_warn!("warning: {}", error_messages::config_load_failed(&err));
      DiaryConfig::default()
    }
  }
}

pub fn run() -> Result<()> {
  utils::log::init_diagnostics();
  let cfg = load_config_or_warn();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    // --help and --version
    Err(err) if !err.use_stderr() => {
      err.print()?;
      return Ok(());
    }
    Err(err) => return Err(err.into()),
  };

  let Some(message) = cli.message() else {
    anyhow::bail!(
      "{}\n\n{}",
      error_messages::NO_TEXT_PROVIDED,
      Cli::command().render_help()
    );
  };

  commands::append::run(&cfg, cli.dir(), &message)?;
  Ok(())
}
