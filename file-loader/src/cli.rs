/// CLI glue for file-loader: command parsing and invocation of the core pipeline.
///
/// All pipeline logic lives in `file-loader-core`. This module maps arguments
/// onto a [`LoadConfig`](file_loader_core::config::LoadConfig), runs the
/// loader and prints the result.
///
/// For programmatic and integration use, call [`run`] with a constructed [`Cli`].
use crate::load_config::load_config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// CLI for file-loader: resolve, filter and post-process test files.
#[derive(Parser)]
#[clap(
    name = "file-loader",
    version,
    about = "Resolve, filter and post-process a set of test files and print them as JSON"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load every file declared in the given config file
    Load {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
        /// Force a full load, regardless of the config
        #[clap(long, conflicts_with = "no_reset")]
        reset: bool,
        /// Force an incremental reload, regardless of the config
        #[clap(long)]
        no_reset: bool,
    },
}

/// Runs the CLI and writes the loaded files to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Load {
            config,
            reset,
            no_reset,
        } => {
            let config = load_config(config)?;
            let should_reset = match (reset, no_reset) {
                (true, _) => true,
                (_, true) => false,
                _ => config.should_reset,
            };
            tracing::info!(command = "load", should_reset, "Starting file load");

            let loader = config.build_loader()?;
            let files = loader
                .load_files(config.files.clone(), should_reset)
                .context("File load failed")?;
            tracing::info!(command = "load", files = files.len(), "File load complete");
            serde_json::to_writer_pretty(&mut *out, &files)?;
            writeln!(out)?;
            Ok(())
        }
    }
}
