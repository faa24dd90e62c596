use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::model::error::LogError;
use crate::model::failure::FailureRecord;
use crate::path::is_valid_relative_path;

pub const DEFAULT_LOG_PATH: &str = "log";
pub const META_LOG_PATH: &str = "meta_log";
/// `HH:MM:SS MM-DD-YY`, 24-hour clock, local time.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %m-%d-%y";

/// Appends timestamped lines to relative paths under `root`.
///
/// Failed appends are recorded in the meta log instead of being raised.
#[derive(Debug, Clone)]
pub struct Logger {
    root: PathBuf,
    meta_log: PathBuf,
}

impl Logger {
    /// Logger rooted at the current directory, with the meta log at `meta_log`.
    pub fn new() -> Self {
        Self::with_root(".")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Logger {
            root: root.into(),
            meta_log: PathBuf::from(META_LOG_PATH),
        }
    }

    /// Relative meta log paths are resolved against the root.
    pub fn with_meta_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.meta_log = path.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta_log_path(&self) -> PathBuf {
        self.root.join(&self.meta_log)
    }

    /// Returns true if `entry` was appended to `file_path`.
    pub fn log<'a>(
        &self,
        file_path: impl Into<Option<&'a str>>,
        entry: impl Into<Option<&'a str>>,
    ) -> bool {
        self.append(file_path, entry).is_ok()
    }

    /// Validates the inputs, then appends `"<timestamp> <entry>\n"` to `file_path`.
    ///
    /// Invalid inputs fail before any I/O. A failed append is written to the meta
    /// log and returned as [`LogError::Write`], or [`LogError::MetaLog`] when the
    /// meta log could not be written either.
    pub fn append<'a>(
        &self,
        file_path: impl Into<Option<&'a str>>,
        entry: impl Into<Option<&'a str>>,
    ) -> Result<(), LogError> {
        let file_path = file_path.into();

        let Some(entry) = entry.into() else {
            return Err(LogError::MissingEntry);
        };

        let file_path = match file_path {
            Some(path) if is_valid_relative_path(Some(path)) => path,
            other => return Err(LogError::InvalidPath(other.unwrap_or_default().to_string())),
        };

        let line = format_line(&timestamp_now(), entry);
        let Err(err) = append_to(&self.root.join(file_path), line.as_bytes()) else {
            return Ok(());
        };

        let record = FailureRecord::now(entry, err);
        match self.record_failure(&record) {
            Ok(()) => Err(LogError::Write(record)),
            Err(meta) => Err(LogError::MetaLog { record, meta }),
        }
    }

    /// Appends a blank line and the rendered record to the meta log, creating it if needed.
    pub fn record_failure(&self, record: &FailureRecord) -> io::Result<()> {
        let path = self.meta_log_path();
        ensure_file_exists(&path)?;
        append_to(&path, format!("\n{}", record).as_bytes())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_line(timestamp: &str, entry: &str) -> String {
    format!("{} {}\n", timestamp, entry)
}

/// Creates an empty file at `path` unless one already exists. Existing content is untouched.
pub fn ensure_file_exists(path: impl AsRef<Path>) -> io::Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
}

fn append_to(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    file.write_all(bytes)
}
