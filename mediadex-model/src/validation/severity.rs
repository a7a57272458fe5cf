use std::fmt::{self, Display, Formatter};

/// Level of a single reported validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Severity {
    /// Informational note, never blocks processing
    Info = 0,
    /// Something worth surfacing to the caller
    Warn = 1,
    /// Input is unusable as submitted
    Error = 2,
}

impl Severity {
    pub const ALL: [Severity; 3] =
        [Severity::Info, Severity::Warn, Severity::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate outcome of a whole [`ValidationResult`](super::ValidationResult).
///
/// `Ok` is the default when nothing has been reported; it is not a severity.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Status {
    #[default]
    Ok = 0,
    Warn = 1,
    Error = 2,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Error => "ERROR",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Spelled out variant by variant; the two enums must not be tied together
// through their discriminants.
impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Status::Ok,
            Severity::Warn => Status::Warn,
            Severity::Error => Status::Error,
        }
    }
}

/// Status after observing an event of `severity`.
///
/// Never lower than `current`.
pub fn promote(current: Status, severity: Severity) -> Status {
    current.max(Status::from(severity))
}
