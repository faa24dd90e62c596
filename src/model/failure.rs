use std::fmt;
use std::io;

/// One failed append to a target log, as written to the meta log.
#[derive(Debug)]
pub struct FailureRecord {
    message: String,
    timestamp: String,
    cause: Option<io::Error>,
}

impl FailureRecord {
    pub fn new(
        message: impl Into<String>,
        timestamp: impl Into<String>,
        cause: Option<io::Error>,
    ) -> Self {
        FailureRecord {
            message: message.into(),
            timestamp: timestamp.into(),
            cause,
        }
    }

    /// Stamps the record with the current local time.
    pub fn now(message: impl Into<String>, cause: io::Error) -> Self {
        Self::new(message, crate::logger::timestamp_now(), Some(cause))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn cause(&self) -> Option<&io::Error> {
        self.cause.as_ref()
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}\n\tException: ", self.timestamp, self.message)?;
        match &self.cause {
            Some(err) => write!(f, "{:?}: {}", err.kind(), err),
            None => write!(f, "n/a"),
        }
    }
}
