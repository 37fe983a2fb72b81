//! Config command - manage configuration files

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use codecprobe_core::ProbeConfig;
use codecprobe_core::config::{ConfigFile, FFMPEG_ENV, sample_config};

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the path to the config file
    Path,

    /// Show the current configuration
    Show,

    /// Generate a default config file
    Init {
        /// Force overwrite if file exists
        #[arg(short, long)]
        force: bool,
    },

    /// Print a sample configuration to stdout
    Sample,
}

/// Run config subcommand
pub async fn config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Path => {
            let path = ConfigFile::default_path();
            println!("{}", path.display());
            if path.exists() {
                println!("(file exists)");
            } else {
                println!("(file does not exist)");
            }
        }
        ConfigCommand::Show => {
            let path = ConfigFile::default_path();
            let file = ConfigFile::load_from(path.clone())
                .context("Failed to load config file")?;
            let effective = ProbeConfig::load();

            if path.exists() {
                println!("Configuration file: {}\n", path.display());
            } else {
                println!("No configuration file found at: {}", path.display());
                println!("Using default settings. Create a config file with:");
                println!("  codecprobe config init\n");
            }

            println!("[transcoder]");
            println!("ffmpeg_path = {:?}", file.transcoder.ffmpeg_path);
            println!();
            println!("[codec]");
            println!("preferred = {:?}", file.codec.preferred);
            println!();
            println!("Effective settings:");
            println!("  ffmpeg:           {}", effective.ffmpeg_path);
            println!(
                "  preferred codec:  {}",
                effective.preferred_codec.as_deref().unwrap_or("(auto)")
            );
            if std::env::var_os(FFMPEG_ENV).is_some() {
                println!("  ({} is set and overrides ffmpeg_path)", FFMPEG_ENV);
            }
        }
        ConfigCommand::Init { force } => {
            let path = ConfigFile::default_path();

            if path.exists() && !force {
                println!("Configuration file already exists: {}", path.display());
                println!();
                println!("Use --force to overwrite, or edit the existing file.");
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).context("Failed to create config directory")?;
                }
            }

            std::fs::write(&path, sample_config()).context("Failed to write config file")?;

            println!("Created configuration file: {}", path.display());
            println!();
            println!("Edit this file to point codecprobe at ffmpeg or pin an encoder.");
        }
        ConfigCommand::Sample => {
            print!("{}", sample_config());
        }
    }

    Ok(())
}
