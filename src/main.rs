//! Fabric Template Maker - command line entry point.
//!
//! # Usage
//!
//! ```text
//! templatemaker init <config.yaml>
//! templatemaker generate <config.yaml> <output-dir> [--debug] [--log-dir <dir>]
//! ```
//!
//! `init` writes a starter configuration to edit. `generate` loads it
//! (applying `TEMPLATEMAKER_*` environment overrides), validates it and
//! writes the project into `<output-dir>`. Existing files are never
//! overwritten; generation stops at the first collision.

use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use templatemaker::generator::LoggingObserver;
use templatemaker::{APP_NAME, ConfigManager, TemplateMaker, VERSION};

#[derive(Parser, Debug)]
#[command(name = "templatemaker")]
#[command(about = "Scaffold a new Fabric mod project", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,

    /// Also write daily rotating log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Write a starter configuration to edit
    Init {
        /// Configuration file to create
        config: Utf8PathBuf,
    },
    /// Generate a project from a configuration
    Generate {
        /// Configuration file to load
        config: Utf8PathBuf,
        /// Directory the project is written into
        output_dir: Utf8PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard =
        templatemaker::logging::setup_logging(args.log_dir.as_deref(), "templatemaker", args.debug)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    match args.command {
        Command::Init { config } => {
            if config.exists() {
                bail!("{} already exists", config);
            }
            ConfigManager::new(&config).save_mod_config(&ConfigManager::default_mod_config())?;
            tracing::info!("Wrote starter configuration to {}", config);
        }
        Command::Generate { config, output_dir } => {
            let mod_config = ConfigManager::new(&config).load_mod_config()?;

            let maker = TemplateMaker::new();
            let result = maker.generate_with_observer(&mod_config, &output_dir, &mut LoggingObserver);
            maker.metrics().log_summary();

            let report = result.with_context(|| {
                format!("Failed to generate '{}' into {}", mod_config.mod_id, output_dir)
            })?;
            tracing::info!(
                "Project '{}' ready in {} ({} files)",
                mod_config.mod_name,
                output_dir,
                report.artifacts.len()
            );
            for warning in &report.warnings {
                tracing::warn!("{}", warning);
            }
        }
    }

    Ok(())
}
