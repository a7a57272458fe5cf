use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Languages a catalog item can be in or subtitled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Language {
    Cz,
    En,
    Fr,
    Ja,
    Sk,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Cz => "CZ",
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Ja => "JA",
            Language::Sk => "SK",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CZ" => Ok(Language::Cz),
            "EN" => Ok(Language::En),
            "FR" => Ok(Language::Fr),
            "JA" => Ok(Language::Ja),
            "SK" => Ok(Language::Sk),
            _ => Err(ModelError::UnknownLanguage(s.to_string())),
        }
    }
}
