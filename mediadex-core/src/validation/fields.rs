//! Field-level checks shared by the entity validators.
//!
//! Every check returns its own [`ValidationResult`] holding at most one
//! event, keyed `{PREFIX}_{FIELD}_{PROBLEM}`, so validators can merge them
//! without one field's outcome hiding another's.

use std::fmt;

use mediadex_model::{Event, Severity, ValidationResult};

/// Names a validated field for event keys and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    prefix: &'a str,
    name: &'a str,
    label: &'a str,
}

impl<'a> Field<'a> {
    pub const fn new(prefix: &'a str, name: &'a str, label: &'a str) -> Self {
        Self {
            prefix,
            name,
            label,
        }
    }

    pub fn key(&self, problem: &str) -> String {
        format!("{}_{}_{}", self.prefix, self.name, problem)
    }

    pub fn label(&self) -> &str {
        self.label
    }

    fn event(
        &self,
        severity: Severity,
        problem: &str,
        message: impl fmt::Display,
    ) -> ValidationResult<()> {
        std::iter::once(Event::new(
            severity,
            self.key(problem),
            message.to_string(),
        ))
        .collect()
    }
}

/// Required text: must be present, not blank and at most `max_length`
/// characters.
pub fn required_text(
    value: Option<&str>,
    field: Field<'_>,
    max_length: usize,
) -> ValidationResult<()> {
    match value {
        None => field.event(
            Severity::Error,
            "NULL",
            format_args!("{} mustn't be null.", field.label()),
        ),
        Some(text) if text.trim().is_empty() => field.event(
            Severity::Error,
            "EMPTY",
            format_args!("{} mustn't be empty string.", field.label()),
        ),
        Some(text) => max_length_check(text, field, max_length),
    }
}

/// Optional text: absent is fine, present must fit `max_length`.
pub fn optional_text(
    value: Option<&str>,
    field: Field<'_>,
    max_length: usize,
) -> ValidationResult<()> {
    value
        .map(|text| max_length_check(text, field, max_length))
        .unwrap_or_default()
}

fn max_length_check(
    text: &str,
    field: Field<'_>,
    max_length: usize,
) -> ValidationResult<()> {
    if text.chars().count() > max_length {
        field.event(
            Severity::Error,
            "TOO_LONG",
            format_args!(
                "{} mustn't be longer than {max_length} characters.",
                field.label()
            ),
        )
    } else {
        ValidationResult::new()
    }
}

/// Required number within `min..=max`.
pub fn required_range(
    value: Option<i32>,
    field: Field<'_>,
    min: i32,
    max: i32,
) -> ValidationResult<()> {
    match value {
        None => field.event(
            Severity::Error,
            "NULL",
            format_args!("{} mustn't be null.", field.label()),
        ),
        Some(number) => range_check(number, field, min, max),
    }
}

/// Optional number; when present it must be within `min..=max`.
pub fn optional_range(
    value: Option<i32>,
    field: Field<'_>,
    min: i32,
    max: i32,
) -> ValidationResult<()> {
    value
        .map(|number| range_check(number, field, min, max))
        .unwrap_or_default()
}

fn range_check(
    number: i32,
    field: Field<'_>,
    min: i32,
    max: i32,
) -> ValidationResult<()> {
    if (min..=max).contains(&number) {
        ValidationResult::new()
    } else {
        field.event(
            Severity::Error,
            "NOT_VALID",
            format_args!("{} must be between {min} and {max}.", field.label()),
        )
    }
}

pub fn positive(value: i32, field: Field<'_>) -> ValidationResult<()> {
    if value > 0 {
        ValidationResult::new()
    } else {
        field.event(
            Severity::Error,
            "NOT_POSITIVE",
            format_args!("{} must be positive number.", field.label()),
        )
    }
}

/// Reports an empty collection at `severity`.
pub fn not_empty<T>(
    items: &[T],
    field: Field<'_>,
    severity: Severity,
) -> ValidationResult<()> {
    if items.is_empty() {
        field.event(
            severity,
            "EMPTY",
            format_args!("{} mustn't be empty.", field.label()),
        )
    } else {
        ValidationResult::new()
    }
}

pub fn max_items<T>(
    items: &[T],
    field: Field<'_>,
    max: usize,
) -> ValidationResult<()> {
    if items.len() > max {
        field.event(
            Severity::Error,
            "TOO_MANY",
            format_args!("{} mustn't have more than {max} items.", field.label()),
        )
    } else {
        ValidationResult::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadex_model::Status;

    const NAME: Field<'static> = Field::new("MOVIE", "CZECH_NAME", "Czech name");
    const YEAR: Field<'static> = Field::new("MOVIE", "YEAR", "Year");

    fn keys(result: &ValidationResult<()>) -> Vec<&str> {
        result.events().iter().map(Event::key).collect()
    }

    #[test]
    fn required_text_distinguishes_null_and_empty() {
        assert_eq!(
            required_text(None, NAME, 10).events(),
            [Event::error(
                "MOVIE_CZECH_NAME_NULL",
                "Czech name mustn't be null."
            )]
        );
        assert_eq!(
            required_text(Some("  "), NAME, 10).events(),
            [Event::error(
                "MOVIE_CZECH_NAME_EMPTY",
                "Czech name mustn't be empty string."
            )]
        );
        assert!(required_text(Some("Pelíšky"), NAME, 10).is_ok());
    }

    #[test]
    fn text_length_counts_characters() {
        assert!(required_text(Some("Pelíšky"), NAME, 7).is_ok());
        assert_eq!(
            keys(&required_text(Some("Pelíšky"), NAME, 6)),
            ["MOVIE_CZECH_NAME_TOO_LONG"]
        );
    }

    #[test]
    fn optional_text_allows_absence() {
        assert!(optional_text(None, NAME, 1).events().is_empty());
        assert!(optional_text(Some(""), NAME, 1).is_ok());
        assert!(optional_text(Some("ab"), NAME, 1).is_error());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(required_range(Some(1930), YEAR, 1930, 2000).is_ok());
        assert!(required_range(Some(2000), YEAR, 1930, 2000).is_ok());
        assert_eq!(
            required_range(Some(1929), YEAR, 1930, 2000).events(),
            [Event::error(
                "MOVIE_YEAR_NOT_VALID",
                "Year must be between 1930 and 2000."
            )]
        );
        assert_eq!(
            keys(&required_range(None, YEAR, 1930, 2000)),
            ["MOVIE_YEAR_NULL"]
        );
        assert!(optional_range(None, YEAR, 1930, 2000).is_ok());
        assert!(optional_range(Some(0), YEAR, 1930, 2000).is_error());
    }

    #[test]
    fn positive_rejects_zero() {
        let length = Field::new("MEDIUM", "LENGTH", "Length of medium");
        assert!(positive(1, length).is_ok());
        assert_eq!(keys(&positive(0, length)), ["MEDIUM_LENGTH_NOT_POSITIVE"]);
    }

    #[test]
    fn not_empty_uses_requested_severity() {
        let genres = Field::new("MOVIE", "GENRES", "Genres");
        let empty: [String; 0] = [];

        let result = not_empty(&empty, genres, Severity::Warn);
        assert_eq!(result.status(), Status::Warn);
        assert_eq!(keys(&result), ["MOVIE_GENRES_EMPTY"]);
        assert!(not_empty(&["Drama"], genres, Severity::Warn).is_ok());
    }

    #[test]
    fn max_items_reports_overflow() {
        let authors = Field::new("BOOK", "AUTHORS", "Authors");
        assert!(max_items(&[1, 2], authors, 2).is_ok());
        assert_eq!(
            keys(&max_items(&[1, 2, 3], authors, 2)),
            ["BOOK_AUTHORS_TOO_MANY"]
        );
    }
}
