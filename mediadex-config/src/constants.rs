//! Defaults for every validation rule that configuration can override.

/// Earliest release year accepted for a movie.
pub const DEFAULT_MOVIE_MIN_YEAR: i32 = 1930;
/// Highest IMDB title number accepted.
pub const DEFAULT_MOVIE_MAX_IMDB_CODE: i32 = 9_999_999;
pub const DEFAULT_BOOK_MAX_AUTHORS: usize = 20;
pub const DEFAULT_GAME_MAX_MEDIA_COUNT: i32 = 100;
pub const DEFAULT_TEXT_MAX_NAME_LENGTH: usize = 200;

/// Year of the first publicly screened film.
pub const FIRST_FILM_YEAR: i32 = 1888;
/// How far past the current year `movie.max_year` may reach before warning.
pub const MAX_YEAR_LOOKAHEAD: i32 = 5;

/// Environment variable pointing at the configuration file.
pub const CONFIG_PATH_VAR: &str = "MEDIADEX_CONFIG";
pub const MOVIE_MIN_YEAR_VAR: &str = "MEDIADEX_MOVIE_MIN_YEAR";
pub const MOVIE_MAX_YEAR_VAR: &str = "MEDIADEX_MOVIE_MAX_YEAR";
pub const TEXT_MAX_NAME_LENGTH_VAR: &str = "MEDIADEX_TEXT_MAX_NAME_LENGTH";
