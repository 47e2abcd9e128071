//! Retrolab CLI - Inspect the game library and environment registry
//!
//! # Commands
//!
//! - `retrolab cores` - List loaded emulation cores
//! - `retrolab games` - List installed games
//! - `retrolab states <game>` - List saved states for a game
//! - `retrolab resolve <game>` - Resolve a game to its rom file and platform
//! - `retrolab envs` - List registered environment ids
//!
//! The core manifest (`cores.json`) is loaded from the cores directory at
//! startup; a malformed manifest aborts before any command runs.

mod cores;
mod envs;
mod games;
mod resolve;
mod states;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use retrolab_core::{AssetLocator, CoreCatalog, paths};

/// Retrolab CLI - Inspect the game library and environment registry
#[derive(Parser)]
#[command(name = "retrolab")]
#[command(about = "Inspect the Retrolab game library and environment registry")]
#[command(version)]
struct Cli {
    /// Root directory holding installed game directories
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,

    /// Directory holding core libraries and cores.json
    #[arg(long, global = true)]
    cores_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded emulation cores
    Cores,

    /// List installed games
    Games,

    /// List saved states for a game
    States(states::StatesArgs),

    /// Resolve a game to its rom file and platform
    Resolve(resolve::ResolveArgs),

    /// List registered environment ids
    Envs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let cores_dir = cli
        .cores_dir
        .or_else(paths::default_cores_dir)
        .context("no cores directory: pass --cores-dir or set a home directory")?;
    let data_root = cli
        .data_root
        .or_else(paths::default_data_root)
        .context("no data root: pass --data-root or set a home directory")?;

    let manifest = cores_dir.join(paths::CORE_MANIFEST);
    let catalog = CoreCatalog::load(&manifest, cores_dir.clone())
        .with_context(|| format!("failed to load core manifest {}", manifest.display()))?;
    tracing::debug!(cores = catalog.len(), "catalog loaded");

    let locator = AssetLocator::new(Arc::new(catalog), data_root);

    match cli.command {
        Commands::Cores => cores::execute(&locator),
        Commands::Games => games::execute(&locator),
        Commands::States(args) => states::execute(&locator, args),
        Commands::Resolve(args) => resolve::execute(&locator, args),
        Commands::Envs => envs::execute(&locator),
    }
}
