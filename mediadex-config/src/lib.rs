//! Configuration for mediadex validation rules.
//!
//! Rules come from a TOML file (explicit path, `MEDIADEX_CONFIG`, or one of
//! the default locations), then environment overrides, then built-in
//! defaults. Guard rails run over the result: findings that would make the
//! rules unusable fail the load, softer findings come back as warnings.

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    BookConfig, Config, ConfigMetadata, GameConfig, MovieConfig, TextConfig,
};
pub use validation::apply_guard_rails;
