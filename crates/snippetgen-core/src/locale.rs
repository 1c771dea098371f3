use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};

/// Language used for snippet descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese, e.g. "引数が2個で戻り値がある時の関数".
    #[default]
    Ja,
    /// English, e.g. "Function with 2 arguments and a documented return value".
    En,
}

impl Locale {
    /// Resolve a locale by its code.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            _ => Err(SnippetError::UnknownLocale(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
