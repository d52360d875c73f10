//! roomscene - 3D box layout for room scenes
//!
//! Reads a scene layout config, lays out every container and prints the
//! resulting transforms (and debug boxes, when enabled) as JSON.

mod config;
mod scene;

use anyhow::{Context, Result};
use clap::Parser;
use config::{SceneLayoutConfig, DEFAULT_LAYOUT_PATH};
use scene::AssembleOptions;
use std::{fs, io::Write, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "3D box layout for roomscene containers", long_about = None)]
struct Args {
    /// Scene layout config (TOML)
    #[arg(short, long, default_value = DEFAULT_LAYOUT_PATH)]
    config: PathBuf,

    /// Fail on a missing or malformed config instead of using defaults
    #[arg(long)]
    strict: bool,

    /// Emit debug boxes for every container
    #[arg(long)]
    debug: bool,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Also save the effective config (after defaults) as TOML
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting roomscene v{}", env!("CARGO_PKG_VERSION"));
    roomscene_ui3d::init()?;

    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let config = if args.strict {
        SceneLayoutConfig::load_strict(&args.config)?
    } else {
        SceneLayoutConfig::load_from_path(&args.config)
    };

    if let Some(path) = &args.write_config {
        config
            .save_to_path(path)
            .with_context(|| format!("Failed to save layout config to {}", path.display()))?;
        info!("Saved layout config to {}", path.display());
    }

    let scene = scene::assemble(
        &config,
        AssembleOptions {
            force_debug: args.debug,
        },
    )?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&scene)?
    } else {
        serde_json::to_string(&scene)?
    };

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, json)
                .with_context(|| format!("Failed to write layout to {}", path.display()))?;
            info!("Wrote scene layout to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
