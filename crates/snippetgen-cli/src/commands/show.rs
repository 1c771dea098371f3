use std::path::Path;

use anyhow::Result;

use snippetgen_core::snippet::{SnippetKind, SnippetRecord};

use super::Overrides;
use crate::output;

/// Print a single snippet, selected by its trigger.
///
/// Works for any argument count; no catalog is built.
pub fn run(config_path: Option<&Path>, overrides: Overrides, trigger: &str) -> Result<()> {
    let config = super::load_config(config_path, overrides)?;
    let kind = SnippetKind::from_trigger(trigger)?;
    let record = SnippetRecord::new(&kind, config.describer()?.describe(&kind)?);

    output::print_header(&kind.name());
    output::print_key_value("Prefix", &record.trigger);
    output::print_key_value("Description", &record.description);
    println!();
    output::print_body(&record.body);
    println!();

    Ok(())
}
