//! Select command - choose the encoder a transcode would use

use anyhow::Result;
use clap::Args;
use codecprobe_core::detect::{self, Detector};

use super::{detect_blocking, join_args, probe_config};

/// Arguments for the select command
#[derive(Args)]
pub struct SelectArgs {
    /// Path to the ffmpeg binary (overrides config)
    #[arg(long)]
    pub ffmpeg: Option<String>,

    /// Preferred encoder (overrides config)
    #[arg(long)]
    pub prefer: Option<String>,
}

/// Choose the encoder a transcode would use
pub async fn select(args: SelectArgs) -> Result<()> {
    let config = probe_config(args.ffmpeg).with_preferred_codec(args.prefer);
    config.validate()?;

    let available = detect_blocking(Detector::new(config.ffmpeg_path.clone())).await?;
    let chosen = match detect::select_codec(config.preferred_codec.as_deref(), &available) {
        Ok(codec) => codec,
        Err(e) => {
            if let Some(hint) = e.user_hint() {
                eprintln!("{}", hint);
            }
            return Err(e.into());
        }
    };

    println!("Selected encoder: {}", chosen.name());
    println!("  Global flags:  {}", join_args(chosen.global_flags()));
    println!("  Encoder args:  {}", chosen.encoder_arguments().join(" "));

    Ok(())
}
