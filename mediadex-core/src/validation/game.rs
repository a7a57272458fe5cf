use mediadex_config::{Config, GameConfig, TextConfig};
use mediadex_model::{
    Cheat, CheatData, Game, Severity, ValidationResult, merge_results,
};

use super::Validator;
use super::fields::{self, Field};

const NAME: Field<'static> = Field::new("GAME", "NAME", "Name");
const WIKI_EN: Field<'static> =
    Field::new("GAME", "WIKI_EN", "English Wikipedia");
const MEDIA_COUNT: Field<'static> =
    Field::new("GAME", "MEDIA_COUNT", "Count of media");
const GAME_SETTING: Field<'static> =
    Field::new("CHEAT", "GAME_SETTING", "Setting for game");
const CHEAT_SETTING: Field<'static> =
    Field::new("CHEAT", "CHEAT_SETTING", "Setting for cheat");
const CHEAT_DATA: Field<'static> = Field::new("CHEAT", "DATA", "Cheat's data");
const ACTION: Field<'static> = Field::new("CHEAT_DATA", "ACTION", "Action");
const DESCRIPTION: Field<'static> =
    Field::new("CHEAT_DATA", "DESCRIPTION", "Description");

#[derive(Debug, Clone)]
pub struct GameValidator {
    game: GameConfig,
    text: TextConfig,
}

impl GameValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            game: config.game.clone(),
            text: config.text.clone(),
        }
    }

    pub fn validate_cheat(&self, cheat: &Cheat) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        let mut result = merge_results![
            fields::optional_text(
                cheat.game_setting.as_deref(),
                GAME_SETTING,
                max
            ),
            fields::optional_text(
                cheat.cheat_setting.as_deref(),
                CHEAT_SETTING,
                max
            ),
            fields::not_empty(&cheat.data, CHEAT_DATA, Severity::Error),
        ];
        result.absorb(ValidationResult::<()>::merge(
            cheat.data.iter().map(|data| self.validate_cheat_data(data)),
        ));
        result
    }

    fn validate_cheat_data(&self, data: &CheatData) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        merge_results![
            fields::required_text(data.action.as_deref(), ACTION, max),
            fields::required_text(data.description.as_deref(), DESCRIPTION, max),
        ]
    }
}

impl Validator<Game> for GameValidator {
    fn validate_fields(&self, game: &Game) -> ValidationResult<()> {
        let max = self.text.max_name_length;
        let mut result = merge_results![
            fields::required_text(game.name.as_deref(), NAME, max),
            fields::optional_text(game.wiki_en.as_deref(), WIKI_EN, max),
            fields::optional_range(
                game.media_count,
                MEDIA_COUNT,
                1,
                self.game.max_media_count
            ),
        ];
        if let Some(cheat) = &game.cheat {
            result.absorb(self.validate_cheat(cheat));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadex_model::{EntityId, Event};

    fn valid_game() -> Game {
        Game {
            id: None,
            name: Some("Half-Life".into()),
            wiki_en: Some("https://en.wikipedia.org/wiki/Half-Life_(video_game)".into()),
            media_count: Some(1),
            cheat: Some(Cheat {
                game_setting: Some("-console".into()),
                cheat_setting: None,
                data: vec![CheatData::new("impulse 101", "All weapons")],
            }),
            note: None,
        }
    }

    fn keys(result: &ValidationResult<()>) -> Vec<String> {
        result
            .events()
            .iter()
            .map(|event| event.key().to_string())
            .collect()
    }

    #[test]
    fn valid_game_has_no_events() {
        let result =
            GameValidator::new(&Config::default()).validate_new(&valid_game());
        assert!(result.is_ok());
        assert!(result.events().is_empty(), "{:?}", result.events());
    }

    #[test]
    fn game_without_cheat_is_fine() {
        let game = Game {
            cheat: None,
            media_count: None,
            ..valid_game()
        };
        assert!(
            GameValidator::new(&Config::default())
                .validate_new(&game)
                .is_ok()
        );
    }

    #[test]
    fn media_count_uses_configured_bounds() {
        let mut config = Config::default();
        config.game.max_media_count = 3;
        let game = Game {
            media_count: Some(4),
            ..valid_game()
        };

        let result = GameValidator::new(&config).validate_new(&game);

        assert_eq!(
            result.events(),
            [Event::error(
                "GAME_MEDIA_COUNT_NOT_VALID",
                "Count of media must be between 1 and 3."
            )]
        );
    }

    #[test]
    fn cheat_rows_are_checked_individually() {
        let game = Game {
            cheat: Some(Cheat {
                game_setting: None,
                cheat_setting: None,
                data: vec![
                    CheatData::new("iddqd", "God mode"),
                    CheatData {
                        action: Some(" ".into()),
                        description: None,
                    },
                ],
            }),
            ..valid_game()
        };

        let result = GameValidator::new(&Config::default()).validate_new(&game);

        assert!(result.is_error());
        assert_eq!(
            keys(&result),
            ["CHEAT_DATA_ACTION_EMPTY", "CHEAT_DATA_DESCRIPTION_NULL"]
        );
    }

    #[test]
    fn empty_cheat_and_missing_name_are_both_reported() {
        let game = Game {
            id: Some(EntityId(9)),
            name: None,
            cheat: Some(Cheat::default()),
            ..valid_game()
        };

        let result = GameValidator::new(&Config::default()).validate_new(&game);

        assert_eq!(
            keys(&result),
            ["GAME_ID_NOT_NULL", "GAME_NAME_NULL", "CHEAT_DATA_EMPTY"]
        );
    }
}
