//! Detect command - query ffmpeg for supported encoders

use anyhow::Result;
use clap::Args;
use codecprobe_core::codec;
use codecprobe_core::detect::Detector;

use super::{CodecInfo, detect_blocking, probe_config};

/// Arguments for the detect command
#[derive(Args)]
pub struct DetectArgs {
    /// Path to the ffmpeg binary (overrides config)
    #[arg(long)]
    pub ffmpeg: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Detect supported encoders available through ffmpeg
pub async fn detect(args: DetectArgs) -> Result<()> {
    let detector = Detector::new(probe_config(args.ffmpeg).ffmpeg_path);
    let codecs = detect_blocking(detector.clone()).await?;

    if args.json {
        let infos: Vec<CodecInfo> = codecs
            .iter()
            .filter_map(|name| codec::codec_by_name(name))
            .map(CodecInfo::from_codec)
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("codecprobe - Detected Encoders\n");
    println!("ffmpeg: {}\n", detector.tool_path());

    if codecs.is_empty() {
        println!("No supported H.264 encoders detected.");
        println!();
        println!("Make sure that:");
        println!("  - ffmpeg is installed and the path above is correct");
        println!("  - `{} -encoders` runs successfully", detector.tool_path());
        println!("  - Run with -v to see why detection failed");
        return Ok(());
    }

    println!("{:<16} {}", "Encoder", "Description");
    println!("{}", "-".repeat(40));
    for name in &codecs {
        println!("{:<16} {}", name, codec::description(name).unwrap_or_default());
    }

    Ok(())
}
