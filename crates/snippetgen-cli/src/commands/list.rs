use std::path::Path;

use anyhow::Result;

use snippetgen_core::catalog::SnippetCatalog;
use snippetgen_core::snippet::SnippetKind;

use super::Overrides;
use crate::output;

/// List the trigger, name and description of every catalog entry.
pub fn run(config_path: Option<&Path>, overrides: Overrides) -> Result<()> {
    let config = super::load_config(config_path, overrides)?;
    let max = super::resolve_max_args(&config)?;
    let catalog = SnippetCatalog::build(max, &config.describer()?)?;

    output::print_header(&format!("snippetgen list ({} snippets)", catalog.len()));
    let mut entries: Vec<_> = catalog.iter().collect();
    // Group by count, then function/method, rather than by display name
    entries.sort_by_key(|(_, record)| SnippetKind::from_trigger(&record.trigger).ok());
    for (name, record) in entries {
        output::print_key_value(
            &format!("{:<8}", record.trigger),
            &format!("{name}: {}", record.description),
        );
    }

    Ok(())
}
