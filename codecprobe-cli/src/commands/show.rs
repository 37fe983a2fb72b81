//! Show command - print the ffmpeg arguments for one encoder

use anyhow::{Result, bail};
use clap::Args;
use codecprobe_core::{ProbeError, codec};

use super::join_args;

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Encoder name (e.g. h264_nvenc)
    pub name: String,
}

/// Show the ffmpeg arguments for one encoder
pub async fn show(args: ShowArgs) -> Result<()> {
    let Some(c) = codec::codec_by_name(&args.name) else {
        let err = ProbeError::unknown_codec(&args.name);
        if let Some(hint) = err.user_hint() {
            eprintln!("{}", hint);
        }
        bail!(err);
    };

    println!("{}", c.name());
    println!("  Description:      {}", codec::description(c.name()).unwrap_or_default());
    println!("  Hardware:         {}", if c.is_hardware() { "yes" } else { "no" });
    println!("  Global flags:     {}", join_args(c.global_flags()));
    println!("  Pixel format:     {}", c.pixel_format());
    println!("  Extra arguments:  {}", join_args(c.extra_arguments()));
    println!("  Encoder args:     {}", c.encoder_arguments().join(" "));

    Ok(())
}
