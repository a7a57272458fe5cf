//! Guard rails applied to the effective configuration.
//!
//! Problems are reported as events: `ERROR` events make loading fail,
//! `WARN`/`INFO` events are handed back to the caller alongside the config.

use mediadex_model::{Event, ValidationResult};

use crate::constants::{FIRST_FILM_YEAR, MAX_YEAR_LOOKAHEAD};
use crate::models::{Config, current_year};

pub fn apply_guard_rails(config: &Config) -> ValidationResult<()> {
    let mut report = ValidationResult::new();

    let movie = &config.movie;
    if movie.min_year > movie.max_year {
        report.add_event(Event::error(
            "CONFIG_MOVIE_YEAR_RANGE_INVERTED",
            format!(
                "movie.min_year ({}) is after movie.max_year ({})",
                movie.min_year, movie.max_year
            ),
        ));
    }
    if movie.min_year < FIRST_FILM_YEAR {
        report.add_event(Event::warn(
            "CONFIG_MOVIE_MIN_YEAR_BEFORE_CINEMA",
            format!(
                "movie.min_year ({}) predates the first film ({FIRST_FILM_YEAR})",
                movie.min_year
            ),
        ));
    }
    if movie.max_year > current_year() + MAX_YEAR_LOOKAHEAD {
        report.add_event(Event::warn(
            "CONFIG_MOVIE_MAX_YEAR_IN_FUTURE",
            format!(
                "movie.max_year ({}) is more than {MAX_YEAR_LOOKAHEAD} years ahead",
                movie.max_year
            ),
        ));
    }
    if movie.max_imdb_code <= 0 {
        report.add_event(Event::error(
            "CONFIG_MOVIE_MAX_IMDB_CODE_NOT_POSITIVE",
            "movie.max_imdb_code must be positive",
        ));
    }

    if config.book.max_authors == 0 {
        report.add_event(Event::error(
            "CONFIG_BOOK_MAX_AUTHORS_ZERO",
            "book.max_authors must allow at least one author",
        ));
    }

    if config.game.max_media_count <= 0 {
        report.add_event(Event::error(
            "CONFIG_GAME_MAX_MEDIA_COUNT_NOT_POSITIVE",
            "game.max_media_count must be positive",
        ));
    }

    if config.text.max_name_length == 0 {
        report.add_event(Event::error(
            "CONFIG_TEXT_MAX_NAME_LENGTH_ZERO",
            "text.max_name_length must be at least 1",
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadex_model::Status;

    #[test]
    fn defaults_pass_cleanly() {
        let report = apply_guard_rails(&Config::default());
        assert!(report.is_ok(), "{:?}", report.events());
        assert!(report.events().is_empty());
    }

    #[test]
    fn inverted_year_range_is_an_error() {
        let mut config = Config::default();
        config.movie.min_year = 2000;
        config.movie.max_year = 1990;

        let report = apply_guard_rails(&config);

        assert!(report.is_error());
        assert_eq!(
            report.events()[0].key(),
            "CONFIG_MOVIE_YEAR_RANGE_INVERTED"
        );
    }

    #[test]
    fn early_min_year_only_warns() {
        let mut config = Config::default();
        config.movie.min_year = 1850;

        let report = apply_guard_rails(&config);

        assert_eq!(report.status(), Status::Warn);
        assert_eq!(
            report.events()[0].key(),
            "CONFIG_MOVIE_MIN_YEAR_BEFORE_CINEMA"
        );
    }

    #[test]
    fn every_problem_is_reported() {
        let mut config = Config::default();
        config.movie.max_imdb_code = 0;
        config.book.max_authors = 0;
        config.game.max_media_count = -1;
        config.text.max_name_length = 0;

        let keys: Vec<_> = apply_guard_rails(&config)
            .events()
            .iter()
            .map(|event| event.key().to_string())
            .collect();

        assert_eq!(
            keys,
            [
                "CONFIG_MOVIE_MAX_IMDB_CODE_NOT_POSITIVE",
                "CONFIG_BOOK_MAX_AUTHORS_ZERO",
                "CONFIG_GAME_MAX_MEDIA_COUNT_NOT_POSITIVE",
                "CONFIG_TEXT_MAX_NAME_LENGTH_ZERO",
            ]
        );
    }
}
