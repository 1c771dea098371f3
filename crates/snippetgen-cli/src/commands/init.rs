use std::path::Path;

use anyhow::Result;

use snippetgen_core::catalog::MaxArgs;
use snippetgen_core::config::{GeneratorConfig, CONFIG_FILE};
use snippetgen_core::locale::Locale;

use crate::output;
use crate::LocaleChoice;

/// Write a default `snippetgen.config.json`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn run(
    config_path: Option<&Path>,
    max_args: Option<i64>,
    locale: Option<LocaleChoice>,
    force: bool,
) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(CONFIG_FILE));
    output::print_header(&format!("snippetgen init: {}", path.display()));

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(n) = max_args {
        MaxArgs::try_from(n)?;
    }

    let config = GeneratorConfig {
        max_args,
        locale: match locale {
            Some(choice) => Locale::from_name(choice.as_str())?,
            None => Locale::default(),
        },
        ..Default::default()
    };
    config.save(path)?;

    output::print_success(&format!("Wrote {}", path.display()));
    output::print_key_value("Output", &config.output.display().to_string());
    output::print_key_value("Locale", config.locale.as_str());
    println!();
    println!("  Next steps:");
    println!("    snippetgen generate");
    println!("    snippetgen list");
    println!();

    Ok(())
}
