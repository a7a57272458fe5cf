//! JSON reports printed by the CLI.

use mediadex_core::CatalogError;
use mediadex_model::{EntityId, Event, Status, ValidationResult};
use serde::Serialize;

/// Outcome of validating one input element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub index: usize,
    pub status: Status,
    pub events: Vec<Event>,
}

impl ItemReport {
    pub fn from_result<T>(index: usize, result: ValidationResult<T>) -> Self {
        Self {
            index,
            status: result.status(),
            events: result.into_events(),
        }
    }
}

/// Outcome of importing one input element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub status: Status,
    pub events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImportItem {
    pub fn stored(index: usize, result: ValidationResult<EntityId>) -> Self {
        let status = result.status();
        let id = result.data().copied();
        Self {
            index,
            id,
            status,
            events: result.into_events(),
            error: None,
        }
    }

    pub fn rejected(index: usize, err: &CatalogError) -> Self {
        Self {
            index,
            id: None,
            status: Status::Error,
            events: err.events().to_vec(),
            error: Some(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub status: Status,
    pub items: Vec<ImportItem>,
}

impl ImportReport {
    pub fn new(items: Vec<ImportItem>) -> Self {
        let status = combined_status(items.iter().map(|item| item.status));
        Self { status, items }
    }
}

/// Highest status among `statuses`; `Ok` when there are none.
pub fn combined_status(statuses: impl IntoIterator<Item = Status>) -> Status {
    statuses.into_iter().fold(Status::Ok, Status::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_report_shape() {
        let mut result: ValidationResult<()> = ValidationResult::new();
        result.add_event(Event::warn(
            "MOVIE_GENRES_EMPTY",
            "Genres mustn't be empty.",
        ));

        let report = ItemReport::from_result(3, result);

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "index": 3,
                "status": "WARN",
                "events": [{
                    "severity": "WARN",
                    "key": "MOVIE_GENRES_EMPTY",
                    "message": "Genres mustn't be empty."
                }]
            })
        );
    }

    #[test]
    fn rejected_item_keeps_every_event() {
        let err = CatalogError::validation(vec![
            Event::error("GAME_NAME_NULL", "Name mustn't be null."),
            Event::warn("W", "w"),
        ]);

        let item = ImportItem::rejected(0, &err);

        assert_eq!(item.status, Status::Error);
        assert_eq!(item.events.len(), 2);
        assert!(item.error.as_deref().unwrap().starts_with("Validation failed"));
    }

    #[test]
    fn import_status_is_the_worst_item() {
        let ok = ImportItem::stored(0, ValidationResult::of(EntityId(1)));
        let warned = ImportItem::stored(
            1,
            ValidationResult::<()>::warn("W", "w").with_data(EntityId(2)),
        );

        assert_eq!(ImportReport::new(vec![]).status, Status::Ok);
        assert_eq!(
            ImportReport::new(vec![ok.clone(), warned]).status,
            Status::Warn
        );
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["id"], json!(1));
        assert!(value.get("error").is_none());
    }
}
