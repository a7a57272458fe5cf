use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    CONFIG_PATH_VAR, MOVIE_MAX_YEAR_VAR, MOVIE_MIN_YEAR_VAR,
    TEXT_MAX_NAME_LENGTH_VAR,
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub movie: FileMovieConfig,
    #[serde(default)]
    pub book: FileBookConfig,
    #[serde(default)]
    pub game: FileGameConfig,
    #[serde(default)]
    pub text: FileTextConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileMovieConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_imdb_code: Option<i32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileBookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_authors: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileGameConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_media_count: Option<i32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileTextConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_name_length: Option<usize>,
}

/// Raw configuration values read from the environment.
///
/// Values stay unparsed here so the loader can report the offending
/// variable by name.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub movie_min_year: Option<String>,
    pub movie_max_year: Option<String>,
    pub text_max_name_length: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config_path: lookup(CONFIG_PATH_VAR)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            movie_min_year: lookup(MOVIE_MIN_YEAR_VAR),
            movie_max_year: lookup(MOVIE_MAX_YEAR_VAR),
            text_max_name_length: lookup(TEXT_MAX_NAME_LENGTH_VAR),
        }
    }
}
