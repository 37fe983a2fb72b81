//! Configuration for codecprobe
//!
//! Resolves the transcoding tool path and codec preference from the config
//! file, the environment, and explicit overrides.

mod file;

pub use file::{CodecSettings, ConfigFile, TranscoderSettings, sample_config};

use crate::codec;
use crate::error::{ProbeError, Result};

/// Environment variable overriding the configured ffmpeg path
pub const FFMPEG_ENV: &str = "CODECPROBE_FFMPEG";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Path or command name of the transcoding tool
    pub ffmpeg_path: String,
    /// Preferred encoder, if any
    pub preferred_codec: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            preferred_codec: None,
        }
    }
}

impl ProbeConfig {
    /// Build runtime configuration from a config file
    pub fn from_file(file: &ConfigFile) -> Self {
        let preferred = file.codec.preferred.trim();
        let ffmpeg_path = file.transcoder.ffmpeg_path.trim();

        Self {
            ffmpeg_path: if ffmpeg_path.is_empty() {
                Self::default().ffmpeg_path
            } else {
                ffmpeg_path.to_string()
            },
            preferred_codec: (!preferred.is_empty()).then(|| preferred.to_string()),
        }
    }

    /// Load the config file and apply the environment override
    pub fn load() -> Self {
        let mut config = Self::from_file(&ConfigFile::load_or_default());
        if let Ok(path) = std::env::var(FFMPEG_ENV) {
            config = config.with_ffmpeg_path(Some(path));
        }
        config
    }

    /// Override the tool path, ignoring `None` and empty strings
    pub fn with_ffmpeg_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path.filter(|p| !p.trim().is_empty()) {
            self.ffmpeg_path = path;
        }
        self
    }

    /// Override the preferred codec, ignoring `None`
    pub fn with_preferred_codec(mut self, codec: Option<String>) -> Self {
        if codec.is_some() {
            self.preferred_codec = codec;
        }
        self
    }

    /// Check that the preferred codec, if set, names a known variant
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.preferred_codec {
            if codec::codec_by_name(name).is_none() {
                return Err(ProbeError::config(format!(
                    "preferred codec '{}' is not a known H.264 encoder",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_file() {
        let config = ProbeConfig::from_file(&ConfigFile::default());
        assert_eq!(config, ProbeConfig::default());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let mut file = ConfigFile::default();
        file.transcoder.ffmpeg_path = "  ".to_string();
        file.codec.preferred = " ".to_string();

        let config = ProbeConfig::from_file(&file);
        assert_eq!(config.ffmpeg_path, "ffmpeg");
        assert_eq!(config.preferred_codec, None);
    }

    #[test]
    fn test_overrides() {
        let config = ProbeConfig::default()
            .with_ffmpeg_path(Some("/opt/ffmpeg/bin/ffmpeg".to_string()))
            .with_preferred_codec(Some("h264_nvenc".to_string()))
            .with_ffmpeg_path(None)
            .with_ffmpeg_path(Some(String::new()));

        assert_eq!(config.ffmpeg_path, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(config.preferred_codec.as_deref(), Some("h264_nvenc"));
    }

    #[test]
    fn test_validate() {
        assert!(ProbeConfig::default().validate().is_ok());

        let config = ProbeConfig::default().with_preferred_codec(Some("h265_magic".to_string()));
        assert!(matches!(config.validate(), Err(ProbeError::Config(_))));
    }
}
