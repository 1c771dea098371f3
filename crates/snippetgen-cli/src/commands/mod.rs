//! CLI command implementations for snippetgen.
//!
//! Each module corresponds to a subcommand (`snippetgen <command>`). Shared
//! input resolution (config file, flag overrides, prompt) lives here.

pub mod check;
pub mod generate;
pub mod init;
pub mod list;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::Input;

use snippetgen_core::catalog::MaxArgs;
use snippetgen_core::config::GeneratorConfig;
use snippetgen_core::locale::Locale;

use crate::LocaleChoice;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub max_args: Option<i64>,
    pub output: Option<PathBuf>,
    pub locale: Option<LocaleChoice>,
}

/// Load the config and apply flag overrides on top.
///
/// An explicit `--locale` also drops any custom description template from the
/// file, since the user asked for a specific built-in wording.
pub fn load_config(config_path: Option<&Path>, overrides: Overrides) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::resolve(config_path)?;
    apply_overrides(&mut config, overrides)?;
    tracing::debug!(?config, "resolved generator config");
    Ok(config)
}

fn apply_overrides(config: &mut GeneratorConfig, overrides: Overrides) -> Result<()> {
    if let Some(max_args) = overrides.max_args {
        config.max_args = Some(max_args);
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    if let Some(locale) = overrides.locale {
        config.locale = Locale::from_name(locale.as_str())?;
        config.description_template = None;
    }
    Ok(())
}

/// Validated maximum argument count, prompting if neither flag nor config set it.
pub fn resolve_max_args(config: &GeneratorConfig) -> Result<MaxArgs> {
    let raw = match config.max_args {
        Some(n) => n,
        None => Input::<i64>::new()
            .with_prompt("Maximum number of arguments")
            .interact_text()?,
    };
    Ok(MaxArgs::try_from(raw)?)
}
