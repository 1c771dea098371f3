use std::io::Write;
use std::path::Path;

use anyhow::Result;
use sha2::{Digest, Sha256};

use snippetgen_core::catalog::SnippetCatalog;
use snippetgen_core::writer;

use super::Overrides;
use crate::output;

/// Build the snippet catalog and write it out.
///
/// Resolves the argument count from flags, config or an interactive prompt,
/// builds every entry, and writes the JSON catalog. With `to_stdout` the JSON
/// is printed verbatim and nothing else goes to stdout.
pub fn run(config_path: Option<&Path>, overrides: Overrides, to_stdout: bool) -> Result<()> {
    let config = super::load_config(config_path, overrides)?;
    let max = super::resolve_max_args(&config)?;
    let describer = config.describer()?;

    if to_stdout {
        let catalog = SnippetCatalog::build(max, &describer)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&writer::to_json(&catalog)?)?;
        stdout.flush()?;
        return Ok(());
    }

    output::print_header("snippetgen generate");
    output::print_key_value("Max args", &max.get().to_string());
    output::print_key_value("Locale", config.locale.as_str());

    output::print_step(1, 2, "Building snippet catalog...");
    let catalog = SnippetCatalog::build(max, &describer)?;

    output::print_step(2, 2, &format!("Writing {}", config.output.display()));
    let json = writer::save(&catalog, &config.output)?;

    output::print_success(&format!("Generated {} snippets", catalog.len()));
    output::print_key_value("Output", &config.output.display().to_string());
    output::print_key_value("SHA-256", &hex::encode(Sha256::digest(&json)));

    Ok(())
}
