use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Parse an optional raw environment value, keeping the variable name for
/// error reporting. Blank values count as unset.
pub fn parse_env_value<T: FromStr>(
    name: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ConfigLoadError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty())
    else {
        return Ok(None);
    };

    raw.parse::<T>()
        .map(Some)
        .map_err(|_| ConfigLoadError::InvalidValue {
            name,
            value: raw.to_string(),
        })
}
