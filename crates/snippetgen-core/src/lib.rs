//! Core library for snippetgen.
//!
//! Builds a catalog of Python docstring snippets for an editor's user-snippet
//! file: one entry per argument count, function or method, with or without a
//! documented return value. The [`catalog`] builder is pure; [`writer`] handles
//! serialization and [`config`] the optional `snippetgen.config.json`.
//!
//! ```ignore
//! let catalog = snippetgen_core::catalog::build_catalog(3)?;
//! snippetgen_core::writer::save(&catalog, std::path::Path::new("snippet.json"))?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod snippet;
pub mod templates;
pub mod writer;
