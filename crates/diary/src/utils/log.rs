/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }
}

// These macros enforce the agreed style: info = neutral, warn = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.
// Info goes to stdout, warnings go to stderr so stdout stays pipeable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Warn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stream {
  Stdout,
  Stderr,
}

pub(crate) fn stream_for(level: &LogLevel) -> Stream {
  match level {
    LogLevel::Info => Stream::Stdout,
    LogLevel::Warn => Stream::Stderr,
  }
}

pub(crate) fn emit(level: LogLevel, text: String) {
  match stream_for(&level) {
    Stream::Stdout => anstream::println!("{}", text),
    Stream::Stderr => anstream::eprintln!("{}", text),
  }
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Info,
      format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Warn,
      $crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

/// Initialize diagnostic logging from `RUST_LOG`, defaulting to warnings only.
pub fn init_diagnostics() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp_secs()
    .try_init();
}
