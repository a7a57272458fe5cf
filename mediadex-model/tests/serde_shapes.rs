#![cfg(feature = "serde")]

use mediadex_model::prelude::*;
use serde_json::json;

#[test]
fn result_serializes_status_and_events() {
    let mut result = ValidationResult::of(3_u64);
    result.add_event(Event::warn("MOVIE_GENRES_EMPTY", "Genres are empty."));

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({
            "data": 3,
            "status": "WARN",
            "events": [{
                "severity": "WARN",
                "key": "MOVIE_GENRES_EMPTY",
                "message": "Genres are empty."
            }]
        })
    );
}

#[test]
fn empty_result_omits_data() {
    let result: ValidationResult<()> = ValidationResult::new();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value, json!({ "status": "OK", "events": [] }));
}

#[test]
fn event_round_trips_through_json() {
    let event = Event::error("BOOK_AUTHORS_EMPTY", "Authors mustn't be empty.");
    let text = serde_json::to_string(&event).unwrap();
    let back: Event = serde_json::from_str(&text).unwrap();

    assert_eq!(back, event);
}

#[test]
fn movie_accepts_sparse_json() {
    let movie: Movie = serde_json::from_value(json!({
        "czech_name": "Pelíšky",
        "year": 1999,
        "languages": ["CZ"],
        "media": [{ "length": 115 }]
    }))
    .unwrap();

    assert_eq!(movie.czech_name.as_deref(), Some("Pelíšky"));
    assert_eq!(movie.original_name, None);
    assert_eq!(movie.languages, vec![Language::Cz]);
    assert_eq!(movie.total_length(), 115);
    assert!(movie.genres.is_empty());
}

#[test]
fn entity_id_is_transparent() {
    let book: Book = serde_json::from_value(json!({ "id": 12 })).unwrap();
    assert_eq!(book.id, Some(EntityId(12)));
}
