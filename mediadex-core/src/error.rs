use mediadex_model::{Event, ValidationResult};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Input was rejected; carries every event reported for it.
    #[error("Validation failed: {}", join_events(.events))]
    Validation { events: Vec<Event> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn validation(events: Vec<Event>) -> Self {
        CatalogError::Validation { events }
    }

    /// HTTP status an API boundary should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            CatalogError::Validation { .. } => 422,
            CatalogError::NotFound(_) => 404,
            CatalogError::Internal(_) => 500,
        }
    }

    /// Events behind a validation failure; empty for other variants.
    pub fn events(&self) -> &[Event] {
        match self {
            CatalogError::Validation { events } => events.as_slice(),
            _ => &[],
        }
    }
}

fn join_events(events: &[Event]) -> String {
    events
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pass `result` through unless it has error status.
pub fn ensure_valid<T>(
    result: ValidationResult<T>,
) -> Result<ValidationResult<T>> {
    if result.is_error() {
        Err(CatalogError::validation(result.into_events()))
    } else {
        Ok(result)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
