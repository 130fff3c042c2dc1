pub mod dir;
pub(crate) mod error_messages;
pub mod log;
