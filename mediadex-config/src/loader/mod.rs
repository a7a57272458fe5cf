pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use mediadex_model::{Event, ValidationResult};

use self::error::ConfigLoadError;
use crate::{
    constants::{
        MOVIE_MAX_YEAR_VAR, MOVIE_MIN_YEAR_VAR, TEXT_MAX_NAME_LENGTH_VAR,
    },
    models::{
        BookConfig, Config, ConfigMetadata, GameConfig, MovieConfig,
        TextConfig,
        sources::{EnvConfig, FileConfig},
    },
    util::parse_env_value,
    validation::apply_guard_rails,
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("mediadex.toml"),
        PathBuf::from("config/mediadex.toml"),
    ]
});

/// Effective configuration plus the non-fatal findings produced while
/// building it.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ValidationResult<()>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Read `.env` into the process environment before gathering.
    pub load_env_file: bool,
    /// Use these values instead of reading the process environment.
    pub env_override: Option<EnvConfig>,
}

impl Default for ConfigLoaderOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_file: None,
            load_env_file: true,
            env_override: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Skip `.env` and the process environment, using `env` instead.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.load_env_file = false;
        self.options.env_override = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = if self.options.load_env_file {
            self.load_env_file()?
        } else {
            false
        };

        let env_config = self
            .options
            .env_override
            .clone()
            .unwrap_or_else(EnvConfig::gather);

        let mut warnings = ValidationResult::new();
        let (file_config, config_path) =
            self.load_file_config(&env_config, &mut warnings)?;

        let config = compose_config(
            file_config.unwrap_or_default(),
            &env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        let guard_rails = apply_guard_rails(&config);
        if guard_rails.is_error() {
            return Err(ConfigLoadError::GuardRail {
                events: guard_rails.into_events(),
            });
        }
        warnings.absorb(guard_rails);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };

        match loaded {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
        warnings: &mut ValidationResult<()>,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let resolved = if let Some(explicit) = &self.options.config_path {
            Some((explicit.clone(), PathProvenance::Explicit))
        } else if let Some(from_env) = &env_config.config_path {
            Some((from_env.clone(), PathProvenance::Env))
        } else {
            DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .map(|path| (path.clone(), PathProvenance::Default))
        };

        let Some((path, provenance)) = resolved else {
            warnings.add_event(Event::info(
                "CONFIG_FILE_MISSING",
                "No mediadex.toml detected; using defaults and environment",
            ));
            return Ok((None, None));
        };

        if !path.exists() {
            if provenance == PathProvenance::Explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            warnings.add_event(Event::warn(
                "CONFIG_FILE_NOT_FOUND",
                format!(
                    "Configuration file {} does not exist; using defaults",
                    path.display()
                ),
            ));
            return Ok((None, None));
        }

        let file_config = read_file_config(&path)?;
        info!(path = %path.display(), source = ?provenance, "configuration file loaded");
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Environment wins over the file, the file wins over defaults.
fn compose_config(
    file: FileConfig,
    env: &EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let movie_defaults = MovieConfig::default();
    let movie = MovieConfig {
        min_year: parse_env_value(
            MOVIE_MIN_YEAR_VAR,
            env.movie_min_year.as_deref(),
        )?
        .or(file.movie.min_year)
        .unwrap_or(movie_defaults.min_year),
        max_year: parse_env_value(
            MOVIE_MAX_YEAR_VAR,
            env.movie_max_year.as_deref(),
        )?
        .or(file.movie.max_year)
        .unwrap_or(movie_defaults.max_year),
        max_imdb_code: file
            .movie
            .max_imdb_code
            .unwrap_or(movie_defaults.max_imdb_code),
    };

    let book = BookConfig {
        max_authors: file
            .book
            .max_authors
            .unwrap_or(BookConfig::default().max_authors),
    };

    let game = GameConfig {
        max_media_count: file
            .game
            .max_media_count
            .unwrap_or(GameConfig::default().max_media_count),
    };

    let text = TextConfig {
        max_name_length: parse_env_value(
            TEXT_MAX_NAME_LENGTH_VAR,
            env.text_max_name_length.as_deref(),
        )?
        .or(file.text.max_name_length)
        .unwrap_or(TextConfig::default().max_name_length),
    };

    debug!(?movie, ?book, ?game, ?text, "composed validation configuration");

    Ok(Config {
        movie,
        book,
        game,
        text,
        metadata,
    })
}
