use std::path::PathBuf;

use mediadex_config::ConfigLoadError;
use mediadex_core::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CtlError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as a JSON array of entities")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, CtlError>;
