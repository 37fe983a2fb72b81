//! H.264 encoder model
//!
//! Provides:
//! - The [`Codec`] capability trait
//! - One parameterless type per encoder backend
//! - A registry for looking variants up by name
//! - The supported-codec catalog used to filter detection results

mod catalog;
mod variants;

pub use catalog::{description, is_supported, supported_codecs};
pub use variants::{
    Libx264Codec, NvencCodec, OmxCodec, QuicksyncCodec, V4l2m2mCodec, VAAPI_DEVICE, VaapiCodec,
};

use std::fmt;

/// Invocation parameters for one H.264 encoder backend
///
/// All queries are constant for a given variant.
pub trait Codec: fmt::Debug + Send + Sync {
    /// Encoder name, as ffmpeg reports it
    fn name(&self) -> &'static str;

    /// Tool-level flags that must precede the input specification
    fn global_flags(&self) -> &'static [&'static str];

    /// Pixel format input frames are converted to
    fn pixel_format(&self) -> &'static str;

    /// Encoder-specific tuning and filter arguments
    fn extra_arguments(&self) -> &'static [&'static str];

    /// Output-side arguments selecting this encoder
    ///
    /// `-c:v <name> -pix_fmt <format>` followed by the extra arguments.
    fn encoder_arguments(&self) -> Vec<&'static str> {
        let mut args = vec!["-c:v", self.name(), "-pix_fmt", self.pixel_format()];
        args.extend_from_slice(self.extra_arguments());
        args
    }

    /// Whether this encoder offloads to dedicated hardware
    fn is_hardware(&self) -> bool {
        self.name() != Libx264Codec.name()
    }
}

impl<'a> fmt::Display for dyn Codec + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static CODECS: [&dyn Codec; 6] = [
    &Libx264Codec,
    &OmxCodec,
    &VaapiCodec,
    &NvencCodec,
    &QuicksyncCodec,
    &V4l2m2mCodec,
];

/// Every known codec variant
pub fn all_codecs() -> &'static [&'static dyn Codec] {
    &CODECS
}

/// Find the codec variant with the given encoder name
pub fn codec_by_name(name: &str) -> Option<&'static dyn Codec> {
    CODECS.iter().copied().find(|codec| codec.name() == name)
}

/// Software fallback used when no hardware encoder is chosen
pub fn default_codec() -> &'static dyn Codec {
    &Libx264Codec
}
