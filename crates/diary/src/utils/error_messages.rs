//! Common error messages used across the codebase.
//! Centralizes error message strings to ensure consistency and simplify maintenance.

// Usage errors
pub(crate) const NO_TEXT_PROVIDED: &str = "Error: no text provided";

// Filesystem errors
pub(crate) fn create_dir_failed(path: impl std::fmt::Display) -> String {
  format!("failed to create directory {path}")
}

pub(crate) fn open_failed(path: impl std::fmt::Display) -> String {
  format!("failed to open {path}")
}

pub(crate) fn write_failed(path: impl std::fmt::Display) -> String {
  format!("failed to write {path}")
}

// Config errors
pub(crate) fn config_load_failed(err: impl std::fmt::Display) -> String {
  format!("failed to load config: {err}")
}
