//! List command - show every known encoder

use anyhow::Result;
use clap::Args;
use codecprobe_core::codec;

use super::{CodecInfo, join_args};

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List every known encoder and its parameters
pub async fn list(args: ListArgs) -> Result<()> {
    if args.json {
        let infos: Vec<CodecInfo> = codec::all_codecs()
            .iter()
            .map(|c| CodecInfo::from_codec(*c))
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("codecprobe - Known Encoders\n");
    println!(
        "{:<14} {:<16} {:<10} {:<36} {}",
        "Encoder", "Description", "Pix fmt", "Global flags", "Extra arguments"
    );
    println!("{}", "-".repeat(100));

    for c in codec::all_codecs() {
        println!(
            "{:<14} {:<16} {:<10} {:<36} {}",
            c.name(),
            codec::description(c.name()).unwrap_or_default(),
            c.pixel_format(),
            join_args(c.global_flags()),
            join_args(c.extra_arguments()),
        );
    }

    Ok(())
}
