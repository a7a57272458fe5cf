pub mod sources;

use std::path::PathBuf;

use chrono::Datelike;

use crate::constants::{
    DEFAULT_BOOK_MAX_AUTHORS, DEFAULT_GAME_MAX_MEDIA_COUNT,
    DEFAULT_MOVIE_MAX_IMDB_CODE, DEFAULT_MOVIE_MIN_YEAR,
    DEFAULT_TEXT_MAX_NAME_LENGTH,
};

/// Effective validation rules after merging file, environment and defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub movie: MovieConfig,
    pub book: BookConfig,
    pub game: GameConfig,
    pub text: TextConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieConfig {
    pub min_year: i32,
    pub max_year: i32,
    pub max_imdb_code: i32,
}

impl Default for MovieConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MOVIE_MIN_YEAR,
            max_year: current_year(),
            max_imdb_code: DEFAULT_MOVIE_MAX_IMDB_CODE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    pub max_authors: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            max_authors: DEFAULT_BOOK_MAX_AUTHORS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_media_count: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_media_count: DEFAULT_GAME_MAX_MEDIA_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    pub max_name_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_TEXT_MAX_NAME_LENGTH,
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}
