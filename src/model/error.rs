use std::fmt;
use std::io;

use crate::model::failure::FailureRecord;

#[derive(Debug)]
pub enum LogError {
    InvalidArguments(String),
    MissingEntry,
    InvalidPath(String),
    /// The target append failed. The failure has already been written to the meta log.
    Write(FailureRecord),
    /// The target append failed and so did the meta log append.
    MetaLog { record: FailureRecord, meta: io::Error },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            LogError::MissingEntry => write!(f, "Missing log entry"),
            LogError::InvalidPath(path) => write!(f, "Invalid relative path: {:?}", path),
            LogError::Write(record) => write_cause(f, record),
            LogError::MetaLog { record, meta } => {
                write_cause(f, record)?;
                write!(f, " (meta log also failed: {})", meta)
            }
        }
    }
}

fn write_cause(f: &mut fmt::Formatter, record: &FailureRecord) -> fmt::Result {
    match record.cause() {
        Some(err) => write!(f, "Write error: {}", err),
        None => write!(f, "Write error"),
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Write(record) => record
                .cause()
                .map(|err| err as &(dyn std::error::Error + 'static)),
            LogError::MetaLog { meta, .. } => Some(meta),
            _ => None,
        }
    }
}
