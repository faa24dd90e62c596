//! Append-only text logger.
//!
//! [`Logger::log`] appends `"<HH:MM:SS MM-DD-YY> <entry>"` lines to a relative path.
//! When the append fails, a [`FailureRecord`] describing it is written to the meta log.

pub mod logger;
pub mod model;
pub mod path;

pub use logger::{ensure_file_exists, timestamp_now, Logger, DEFAULT_LOG_PATH, META_LOG_PATH};
pub use model::error::LogError;
pub use model::failure::FailureRecord;
pub use path::{are_valid_relative_paths, is_valid_relative_path};
