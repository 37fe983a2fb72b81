//! codecprobe CLI
//!
//! H.264 encoder capability detection for ffmpeg-based transcoders.
//!
//! # Usage
//!
//! ```bash
//! # Show which supported H.264 encoders the local ffmpeg offers
//! codecprobe detect
//!
//! # List every known encoder and its ffmpeg arguments
//! codecprobe list
//!
//! # Pick the encoder a transcode would use
//! codecprobe select --prefer h264_vaapi
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// codecprobe - H.264 encoder capability detection
#[derive(Parser)]
#[command(name = "codecprobe")]
#[command(author = "GhostKellz")]
#[command(version)]
#[command(about = "Detect which H.264 encoders the local ffmpeg supports", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect supported encoders available through ffmpeg
    Detect(commands::DetectArgs),

    /// List every known encoder and its parameters
    #[command(alias = "ls")]
    List(commands::ListArgs),

    /// Show the ffmpeg arguments for one encoder
    Show(commands::ShowArgs),

    /// Choose the encoder a transcode would use
    Select(commands::SelectArgs),

    /// Manage the configuration file
    Config(commands::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let directive = format!("codecprobe_core={level}").parse()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Detect(args) => commands::detect(args).await?,
        Commands::List(args) => commands::list(args).await?,
        Commands::Show(args) => commands::show(args).await?,
        Commands::Select(args) => commands::select(args).await?,
        Commands::Config(args) => commands::config(args).await?,
    }

    Ok(())
}
