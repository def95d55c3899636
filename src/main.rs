use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use vision_snake::game::{GameConfig, SystemClock};
use vision_snake::modes::{TerminalMode, select_device};

#[derive(Parser)]
#[command(name = "vision-snake")]
#[command(version, about = "Vision Snake - control a snake with your index finger")]
struct Cli {
    /// Capture device index (0 is the terminal pointer)
    #[arg(long)]
    camera: Option<u32>,

    /// Print the full error chain on failure and log at debug level
    #[arg(long)]
    debug: bool,

    /// Game config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play area width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Play area height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path, debug: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let default_filter = if debug { "vision_snake=debug" } else { "vision_snake=info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_logging(path, cli.debug)?;
    }

    let config = load_config(cli)?;
    let device = select_device(cli.camera);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(device, "Vision Snake starting");

    let mut mode = TerminalMode::new(config, SystemClock::shared(), rng)?;
    mode.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("Starting Vision Snake...");
    println!("Use your index finger (the mouse pointer) to control the snake.");
    println!("Show an open palm (hold the left button) for 2 seconds to restart after game over.");
    println!("Press 'q' or ESC to quit.");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error running Vision Snake: {err}");
            if cli.debug {
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}
