//! snippetgen CLI — Python docstring snippets for editor user-snippet files.
//!
//! Provides five commands: `generate`, `list`, `show`, `check`, and `init`.
//!
//! Catalog construction lives in [`snippetgen_core`]; this crate only gathers
//! input (flags, config file, prompt) and handles output.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use commands::Overrides;

#[derive(Parser)]
#[command(
    name = "snippetgen",
    about = "Generate Python docstring snippets for editor user-snippet files",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to snippetgen.config.json (default: ./snippetgen.config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the snippet catalog file
    Generate {
        /// Highest argument count to generate (prompts if not set anywhere)
        #[arg(long, allow_negative_numbers = true)]
        max_args: Option<i64>,

        /// Output path for the catalog
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Description language
        #[arg(long, value_enum)]
        locale: Option<LocaleChoice>,

        /// Print the catalog to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// List every trigger in the catalog
    List {
        /// Highest argument count to list
        #[arg(long, allow_negative_numbers = true)]
        max_args: Option<i64>,

        /// Description language
        #[arg(long, value_enum)]
        locale: Option<LocaleChoice>,
    },

    /// Show a single snippet by trigger (e.g. fa2r)
    Show {
        /// Snippet trigger
        trigger: String,

        /// Description language
        #[arg(long, value_enum)]
        locale: Option<LocaleChoice>,
    },

    /// Check that an existing catalog file is up to date
    Check {
        /// Highest argument count expected in the file
        #[arg(long, allow_negative_numbers = true)]
        max_args: Option<i64>,

        /// Catalog file to check
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Description language
        #[arg(long, value_enum)]
        locale: Option<LocaleChoice>,
    },

    /// Write a default snippetgen.config.json
    Init {
        /// Highest argument count to store in the config
        #[arg(long, allow_negative_numbers = true)]
        max_args: Option<i64>,

        /// Description language
        #[arg(long, value_enum)]
        locale: Option<LocaleChoice>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LocaleChoice {
    Ja,
    En,
}

impl LocaleChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stderr keeps `generate --stdout` output clean
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Generate {
            max_args,
            output,
            locale,
            stdout,
        } => {
            let overrides = Overrides {
                max_args,
                output,
                locale,
            };
            commands::generate::run(config, overrides, stdout)?;
        }
        Commands::List { max_args, locale } => {
            let overrides = Overrides {
                max_args,
                locale,
                ..Default::default()
            };
            commands::list::run(config, overrides)?;
        }
        Commands::Show { trigger, locale } => {
            let overrides = Overrides {
                locale,
                ..Default::default()
            };
            commands::show::run(config, overrides, &trigger)?;
        }
        Commands::Check {
            max_args,
            output,
            locale,
        } => {
            let overrides = Overrides {
                max_args,
                output,
                locale,
            };
            commands::check::run(config, overrides)?;
        }
        Commands::Init {
            max_args,
            locale,
            force,
        } => {
            commands::init::run(config, max_args, locale, force)?;
        }
    }

    Ok(())
}
