use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::utils::error_messages;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Name of the diary file for `date`, e.g. `2024-03-09.md`.
#[must_use]
pub fn diary_file_name(date: NaiveDate) -> String {
  format!("{}.md", date.format(DATE_FORMAT))
}

/// Format a single entry as `[HH:MM:SS] <message>\n`.
///
/// The message is kept verbatim, embedded newlines included.
#[must_use]
pub fn format_entry(time: NaiveTime, message: &str) -> String {
  format!("[{}] {message}\n", time.format(TIME_FORMAT))
}

/// Append `message` to today's diary file in `dir`, creating both if needed.
///
/// # Errors
/// Fails if the directory cannot be created or the file cannot be opened or written.
pub fn append_entry(dir: &Path, message: &str) -> Result<PathBuf> {
  append_entry_at(dir, message, Local::now().naive_local())
}

/// Like [`append_entry`] but with an explicit local timestamp. The file date
/// and the entry time are both taken from `now`.
///
/// # Errors
/// Fails if the directory cannot be created or the file cannot be opened or written.
pub fn append_entry_at(dir: &Path, message: &str, now: NaiveDateTime) -> Result<PathBuf> {
  fs::create_dir_all(dir).with_context(|| error_messages::create_dir_failed(dir.display()))?;

  let path = dir.join(diary_file_name(now.date()));
  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&path)
    .with_context(|| error_messages::open_failed(path.display()))?;

  let entry = format_entry(now.time(), message);
  file
    .write_all(entry.as_bytes())
    .with_context(|| error_messages::write_failed(path.display()))?;

  debug!("appended {} bytes to {}", entry.len(), path.display());
  Ok(path)
}
