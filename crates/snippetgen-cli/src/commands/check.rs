use std::path::Path;

use anyhow::Result;

use snippetgen_core::catalog::SnippetCatalog;
use snippetgen_core::writer;

use super::Overrides;
use crate::output;

/// Compare an existing catalog file with a fresh build.
///
/// Reports entries that are missing, stale (content differs) or unexpected,
/// and fails if there are any.
pub fn run(config_path: Option<&Path>, overrides: Overrides) -> Result<()> {
    let config = super::load_config(config_path, overrides)?;
    let max = super::resolve_max_args(&config)?;

    output::print_header("snippetgen check");
    output::print_key_value("File", &config.output.display().to_string());
    output::print_key_value("Max args", &max.get().to_string());

    let expected = SnippetCatalog::build(max, &config.describer()?)?;
    let existing = writer::load(&config.output)?;
    let diff = existing.diff(&expected);

    if diff.is_clean() {
        output::print_success(&format!("{} snippets up to date", expected.len()));
        return Ok(());
    }

    for name in &diff.missing {
        output::print_warning(&format!("missing: {name}"));
    }
    for name in &diff.stale {
        output::print_warning(&format!("stale: {name}"));
    }
    for name in &diff.unexpected {
        output::print_warning(&format!("unexpected: {name}"));
    }
    output::print_error("catalog is out of date, run `snippetgen generate`");

    anyhow::bail!(
        "{} missing, {} stale, {} unexpected",
        diff.missing.len(),
        diff.stale.len(),
        diff.unexpected.len()
    )
}
