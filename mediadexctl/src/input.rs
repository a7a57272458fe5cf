use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CtlError, Result};

/// Reads a JSON array of entities from `path`.
pub fn read_entities<E: DeserializeOwned>(path: &Path) -> Result<Vec<E>> {
    let raw = fs::read_to_string(path).map_err(|source| CtlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entities = parse_entities(&raw).map_err(|source| CtlError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = entities.len(), "entities read");
    Ok(entities)
}

pub fn parse_entities<E: DeserializeOwned>(
    raw: &str,
) -> serde_json::Result<Vec<E>> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadex_model::{Game, Movie};

    #[test]
    fn missing_fields_default_to_empty() {
        let games: Vec<Game> =
            parse_entities(r#"[{"name": "Doom"}, {}]"#).unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name.as_deref(), Some("Doom"));
        assert!(games[1].name.is_none());
        assert!(games[1].cheat.is_none());
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        assert!(parse_entities::<Movie>(r#"{"czech_name": "Kolja"}"#).is_err());
    }

    #[test]
    fn read_errors_name_the_file() {
        let err = read_entities::<Game>(Path::new("/nonexistent/games.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/games.json"));
    }
}
