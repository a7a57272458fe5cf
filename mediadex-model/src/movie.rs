use crate::entity::{CatalogEntity, EntityKind};
use crate::ids::EntityId;
use crate::language::Language;

/// A movie as submitted to the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Movie {
    pub id: Option<EntityId>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub year: Option<i32>,
    pub languages: Vec<Language>,
    pub subtitles: Vec<Language>,
    pub media: Vec<Medium>,
    /// IMDB title number, without the `tt` prefix.
    pub imdb_code: Option<i32>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub note: Option<String>,
    pub genres: Vec<String>,
}

/// One physical medium of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Medium {
    /// Length in minutes.
    pub length: i32,
}

impl Medium {
    pub fn new(length: i32) -> Self {
        Self { length }
    }
}

impl Movie {
    /// Total running time across all media, in minutes.
    pub fn total_length(&self) -> i64 {
        self.media.iter().map(|medium| i64::from(medium.length)).sum()
    }
}

impl CatalogEntity for Movie {
    const KIND: EntityKind = EntityKind::Movie;

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
