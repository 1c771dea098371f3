//! Unified error types for snippetgen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while building or writing a snippet catalog.
#[derive(Error, Debug)]
pub enum SnippetError {
    // --- Input ---

    /// The maximum argument count was negative.
    #[error("invalid max args: {0} (must be 0 or greater)")]
    InvalidMaxArgs(i64),

    /// A trigger string that no snippet in the catalog can produce.
    #[error("unknown trigger: {0} (expected e.g. fa0, ma2r)")]
    UnknownTrigger(String),

    /// The description locale is not one of the built-in ones.
    #[error("unknown locale: {0} (supported: ja, en)")]
    UnknownLocale(String),

    // --- Configuration ---

    /// The configuration file (`snippetgen.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// A description template failed to compile or render.
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Output ---

    /// The catalog could not be serialized to JSON.
    #[error("failed to serialize snippet catalog")]
    Serialize(#[source] serde_json::Error),

    /// An existing catalog file is not a valid snippet catalog.
    #[error("failed to parse snippet catalog at {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, SnippetError>`.
pub type Result<T> = std::result::Result<T, SnippetError>;
