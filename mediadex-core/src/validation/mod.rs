//! Entity validators.
//!
//! Each validator runs independent field checks and merges their outcomes,
//! so a request is answered with every problem at once rather than the
//! first one found.

pub mod book;
pub mod fields;
pub mod game;
pub mod movie;

pub use book::BookValidator;
pub use game::GameValidator;
pub use movie::MovieValidator;

use mediadex_model::{CatalogEntity, EntityKind, Event, ValidationResult};

/// Validation rules for one catalog entity type.
pub trait Validator<E: CatalogEntity>: Send + Sync {
    /// Checks the entity's own fields, ignoring its id.
    fn validate_fields(&self, entity: &E) -> ValidationResult<()>;

    /// Checks an entity about to be stored for the first time.
    fn validate_new(&self, entity: &E) -> ValidationResult<()> {
        let mut result = ValidationResult::new();
        if entity.id().is_some() {
            result.add_event(Event::error(
                format!("{}_ID_NOT_NULL", E::KIND.prefix()),
                format!("{} ID must be null.", E::KIND.label()),
            ));
        }
        result.absorb(self.validate_fields(entity));
        result
    }

    /// Checks an entity replacing a stored one.
    fn validate_existing(&self, entity: &E) -> ValidationResult<()> {
        let mut result = ValidationResult::new();
        if entity.id().is_none() {
            result.add_event(Event::error(
                format!("{}_ID_NULL", E::KIND.prefix()),
                format!("{} ID mustn't be null.", E::KIND.label()),
            ));
        }
        result.absorb(self.validate_fields(entity));
        result
    }
}

/// Error result for a lookup that found nothing.
pub fn not_exist<T>(kind: EntityKind) -> ValidationResult<T> {
    ValidationResult::error(
        format!("{}_NOT_EXIST", kind.prefix()),
        format!("{} doesn't exist.", kind.label()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadex_model::{EntityId, Game, Status};

    struct AcceptAll;

    impl Validator<Game> for AcceptAll {
        fn validate_fields(&self, _entity: &Game) -> ValidationResult<()> {
            ValidationResult::info("GAME_CHECKED", "Game checked.")
        }
    }

    #[test]
    fn new_entity_must_not_have_id() {
        let game = Game {
            id: Some(EntityId(5)),
            ..Game::default()
        };

        let result = AcceptAll.validate_new(&game);

        assert!(result.is_error());
        assert_eq!(
            result.events(),
            [
                Event::error("GAME_ID_NOT_NULL", "Game ID must be null."),
                Event::info("GAME_CHECKED", "Game checked."),
            ]
        );
    }

    #[test]
    fn existing_entity_needs_id() {
        let result = AcceptAll.validate_existing(&Game::default());

        assert_eq!(result.status(), Status::Error);
        assert_eq!(result.events()[0].key(), "GAME_ID_NULL");
        assert_eq!(result.events().len(), 2);
    }

    #[test]
    fn id_checks_pass_when_id_matches_operation() {
        assert!(AcceptAll.validate_new(&Game::default()).is_ok());
        let stored = Game {
            id: Some(EntityId(1)),
            ..Game::default()
        };
        assert!(AcceptAll.validate_existing(&stored).is_ok());
    }

    #[test]
    fn not_exist_is_keyed_by_kind() {
        let result: ValidationResult<()> = not_exist(EntityKind::Book);
        assert_eq!(
            result.events(),
            [Event::error("BOOK_NOT_EXIST", "Book doesn't exist.")]
        );
    }
}
