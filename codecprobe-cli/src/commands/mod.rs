//! CLI command implementations

mod config;
mod detect;
mod list;
mod select;
mod show;

pub use config::{ConfigArgs, config};
pub use detect::{DetectArgs, detect};
pub use list::{ListArgs, list};
pub use select::{SelectArgs, select};
pub use show::{ShowArgs, show};

use codecprobe_core::ProbeConfig;
use codecprobe_core::codec::{self, Codec};
use codecprobe_core::detect::Detector;
use serde::Serialize;

/// JSON view of one codec variant
#[derive(Debug, Serialize)]
pub struct CodecInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub hardware: bool,
    pub global_flags: &'static [&'static str],
    pub pixel_format: &'static str,
    pub extra_arguments: &'static [&'static str],
}

impl CodecInfo {
    pub fn from_codec(codec: &dyn Codec) -> Self {
        Self {
            name: codec.name(),
            description: codec::description(codec.name()).unwrap_or_default(),
            hardware: codec.is_hardware(),
            global_flags: codec.global_flags(),
            pixel_format: codec.pixel_format(),
            extra_arguments: codec.extra_arguments(),
        }
    }
}

/// Resolve runtime config, applying a command-line ffmpeg path override
fn probe_config(ffmpeg: Option<String>) -> ProbeConfig {
    ProbeConfig::load().with_ffmpeg_path(ffmpeg)
}

/// Run detection off the async runtime
async fn detect_blocking(detector: Detector) -> anyhow::Result<Vec<String>> {
    let codecs = tokio::task::spawn_blocking(move || detector.detect()).await?;
    Ok(codecs)
}

fn join_args(args: &[&str]) -> String {
    if args.is_empty() {
        "(none)".to_string()
    } else {
        args.join(" ")
    }
}
