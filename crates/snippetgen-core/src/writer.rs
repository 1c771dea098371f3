//! Serialization of a [`SnippetCatalog`] to the editor's snippet file.
//!
//! Output format: keys sorted at every level, four-space indentation,
//! non-ASCII text written verbatim, no trailing newline.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::catalog::SnippetCatalog;
use crate::error::{Result, SnippetError};

/// Conventional file name for the generated catalog.
pub const DEFAULT_OUTPUT: &str = "snippet.json";

const INDENT: &[u8] = b"    ";

/// Serialize `catalog` to JSON bytes.
pub fn to_json(catalog: &SnippetCatalog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    catalog.serialize(&mut ser).map_err(SnippetError::Serialize)?;
    Ok(buf)
}

/// Write `catalog` to `path`, creating parent directories. Returns the bytes written.
pub fn save(catalog: &SnippetCatalog, path: &Path) -> Result<Vec<u8>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = to_json(catalog)?;
    std::fs::write(path, &json)?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "wrote snippet catalog");
    Ok(json)
}

/// Load a previously written catalog from `path`.
pub fn load(path: &Path) -> Result<SnippetCatalog> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| SnippetError::CatalogParse {
        path: path.to_path_buf(),
        source: e,
    })
}
