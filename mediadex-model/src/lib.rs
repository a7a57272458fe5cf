//! Core data model definitions shared across mediadex crates.
//!
//! The [`validation`] module holds the outcome model every validator and
//! service reports into; the remaining modules describe the catalog entities
//! being validated.
#![allow(missing_docs)]

pub mod book;
pub mod entity;
pub mod error;
pub mod game;
pub mod ids;
pub mod language;
pub mod movie;
pub mod prelude;
pub mod validation;

pub use book::{Author, Book};
pub use entity::{CatalogEntity, EntityKind};
pub use error::{ModelError, Result as ModelResult};
pub use game::{Cheat, CheatData, Game};
pub use ids::EntityId;
pub use language::Language;
pub use movie::{Medium, Movie};
pub use validation::{Event, Severity, Status, ValidationResult, promote};
