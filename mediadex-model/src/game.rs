use crate::entity::{CatalogEntity, EntityKind};
use crate::ids::EntityId;

/// A game as submitted to the catalog, optionally with its cheats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Game {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub media_count: Option<i32>,
    pub cheat: Option<Cheat>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cheat {
    pub game_setting: Option<String>,
    pub cheat_setting: Option<String>,
    pub data: Vec<CheatData>,
}

/// A single cheat: what to do and what it gives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheatData {
    pub action: Option<String>,
    pub description: Option<String>,
}

impl CheatData {
    pub fn new(action: &str, description: &str) -> Self {
        Self {
            action: Some(action.to_string()),
            description: Some(description.to_string()),
        }
    }
}

impl CatalogEntity for Game {
    const KIND: EntityKind = EntityKind::Game;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }

    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}
