use crate::entity::{CatalogEntity, EntityKind};
use crate::ids::EntityId;
use crate::language::Language;

/// A book as submitted to the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Book {
    pub id: Option<EntityId>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub authors: Vec<Author>,
    pub languages: Vec<Language>,
    pub issn: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Author {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            middle_name: None,
            last_name: Some(last_name.to_string()),
        }
    }
}

impl CatalogEntity for Book {
    const KIND: EntityKind = EntityKind::Book;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }

    fn display_name(&self) -> String {
        self.czech_name
            .clone()
            .or_else(|| self.original_name.clone())
            .unwrap_or_default()
    }
}
