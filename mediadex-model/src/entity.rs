use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::EntityId;

/// Kinds of catalog entities that go through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityKind {
    Movie,
    Book,
    Game,
}

impl EntityKind {
    /// Upper-case prefix used for every event key reported for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Movie => "MOVIE",
            EntityKind::Book => "BOOK",
            EntityKind::Game => "GAME",
        }
    }

    /// Human label used in event messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Movie => "Movie",
            EntityKind::Book => "Book",
            EntityKind::Game => "Game",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(EntityKind::Movie),
            "book" | "books" => Ok(EntityKind::Book),
            "game" | "games" => Ok(EntityKind::Game),
            _ => Err(ModelError::UnknownKind(s.to_string())),
        }
    }
}

/// Common surface of every stored catalog entity.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Option<EntityId>;

    fn set_id(&mut self, id: Option<EntityId>);

    /// Name shown in logs and reports.
    fn display_name(&self) -> String;
}
