use std::fmt::{self, Display, Formatter};

use super::Severity;

/// One reported validation issue.
///
/// `key` is a stable machine-matchable identifier such as
/// `MOVIE_YEAR_NOT_VALID`; `message` is meant for the end user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    severity: Severity,
    key: String,
    message: String,
}

impl Event {
    pub fn new(
        severity: Severity,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn info(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, key, message)
    }

    pub fn warn(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, key, message)
    }

    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, key, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(severity={}, key={}, message={})",
            self.severity, self.key, self.message
        )
    }
}
