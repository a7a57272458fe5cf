//! Snapshot of the types validators and services touch most.

pub use super::book::{Author, Book};
pub use super::entity::{CatalogEntity, EntityKind};
pub use super::game::{Cheat, CheatData, Game};
pub use super::ids::EntityId;
pub use super::language::Language;
pub use super::movie::{Medium, Movie};
pub use super::validation::{Event, Severity, Status, ValidationResult};
pub use crate::merge_results;
