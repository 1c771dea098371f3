//! Generator configuration (`snippetgen.config.json`).
//!
//! Every field is optional. Command-line flags take precedence over the file;
//! a missing `max_args` is asked for interactively by the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};
use crate::locale::Locale;
use crate::templates::renderer::Describer;
use crate::writer::DEFAULT_OUTPUT;

/// Conventional config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "snippetgen.config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Highest argument count to generate. Kept signed so a negative value
    /// in the file is reported as invalid input rather than a parse error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_args: Option<i64>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub locale: Locale,
    /// Handlebars template replacing the locale's built-in description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_template: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_args: None,
            output: default_output(),
            locale: Locale::default(),
            description_template: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| SnippetError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| SnippetError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load from an explicit path, or from [`CONFIG_FILE`] if it exists.
    ///
    /// An explicit path must exist; the conventional one falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| SnippetError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Description renderer for this config.
    pub fn describer(&self) -> Result<Describer> {
        match &self.description_template {
            Some(template) => Describer::from_template(template),
            None => Describer::new(self.locale),
        }
    }
}
