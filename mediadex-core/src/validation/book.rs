use once_cell::sync::Lazy;
use regex::Regex;

use mediadex_config::{BookConfig, Config, TextConfig};
use mediadex_model::{
    Author, Book, Event, Severity, ValidationResult, merge_results,
};

use super::Validator;
use super::fields::{self, Field};

/// `NNNN-NNNC`, where the check character may be `X`.
static ISSN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{3}[\dX]$").expect("ISSN regex should compile")
});

const CZECH_NAME: Field<'static> =
    Field::new("BOOK", "CZECH_NAME", "Czech name");
const ORIGINAL_NAME: Field<'static> =
    Field::new("BOOK", "ORIGINAL_NAME", "Original name");
const AUTHORS: Field<'static> = Field::new("BOOK", "AUTHORS", "Authors");
const LANGUAGES: Field<'static> = Field::new("BOOK", "LANGUAGES", "Languages");
const AUTHOR_FIRST_NAME: Field<'static> =
    Field::new("AUTHOR", "FIRST_NAME", "First name");
const AUTHOR_MIDDLE_NAME: Field<'static> =
    Field::new("AUTHOR", "MIDDLE_NAME", "Middle name");
const AUTHOR_LAST_NAME: Field<'static> =
    Field::new("AUTHOR", "LAST_NAME", "Last name");

#[derive(Debug, Clone)]
pub struct BookValidator {
    book: BookConfig,
    text: TextConfig,
}

impl BookValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            book: config.book.clone(),
            text: config.text.clone(),
        }
    }

    /// Checks one author on its own; reused for every author of a book.
    pub fn validate_author(&self, author: &Author) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        merge_results![
            fields::required_text(
                author.first_name.as_deref(),
                AUTHOR_FIRST_NAME,
                max
            ),
            fields::optional_text(
                author.middle_name.as_deref(),
                AUTHOR_MIDDLE_NAME,
                max
            ),
            fields::required_text(
                author.last_name.as_deref(),
                AUTHOR_LAST_NAME,
                max
            ),
        ]
    }

    fn authors(&self, book: &Book) -> ValidationResult<()> {
        let mut result = merge_results![
            fields::not_empty(&book.authors, AUTHORS, Severity::Error),
            fields::max_items(&book.authors, AUTHORS, self.book.max_authors),
        ];
        result.absorb(ValidationResult::<()>::merge(
            book.authors
                .iter()
                .map(|author| self.validate_author(author)),
        ));
        result
    }

    fn issn(&self, book: &Book) -> ValidationResult<()> {
        match book.issn.as_deref().map(str::trim) {
            None | Some("") => ValidationResult::info(
                "BOOK_ISSN_MISSING",
                "Book has no ISSN.",
            ),
            Some(issn) if ISSN.is_match(issn) => ValidationResult::new(),
            Some(issn) => {
                let mut result = ValidationResult::new();
                result.add_event(Event::error(
                    "BOOK_ISSN_NOT_VALID",
                    format!("ISSN '{issn}' must have format NNNN-NNNC."),
                ));
                result
            }
        }
    }
}

impl Validator<Book> for BookValidator {
    fn validate_fields(&self, book: &Book) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        ValidationResult::merge([
            fields::required_text(book.czech_name.as_deref(), CZECH_NAME, max),
            fields::required_text(
                book.original_name.as_deref(),
                ORIGINAL_NAME,
                max,
            ),
            self.authors(book),
            fields::not_empty(&book.languages, LANGUAGES, Severity::Error),
            self.issn(book),
        ])
    }
}
