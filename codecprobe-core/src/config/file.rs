//! Configuration file loading and saving
//!
//! Loads user configuration from `~/.config/codecprobe/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ProbeError, Result};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Transcoding tool settings
    #[serde(default)]
    pub transcoder: TranscoderSettings,

    /// Codec selection settings
    #[serde(default)]
    pub codec: CodecSettings,
}

/// Transcoding tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscoderSettings {
    /// Path or command name of the ffmpeg binary
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,
}

/// Codec selection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecSettings {
    /// Preferred encoder name (empty = pick automatically)
    #[serde(default)]
    pub preferred: String,
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

impl Default for TranscoderSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
        }
    }
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("codecprobe").join("config.toml")
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("codecprobe")
                .join("config.toml")
        } else {
            PathBuf::from("/etc/codecprobe/config.toml")
        }
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ProbeError::Config(format!("Failed to read config file: {}", e)))?;

        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| ProbeError::Config(format!("Failed to parse config file: {}", e)))?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration, logging warnings but returning defaults on error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ProbeError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ProbeError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| ProbeError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

/// Generate a sample configuration file
pub fn sample_config() -> String {
    r#"# codecprobe configuration

[transcoder]
# Path to the ffmpeg binary, or a command name resolved through PATH.
# The CODECPROBE_FFMPEG environment variable overrides this.
ffmpeg_path = "ffmpeg"

[codec]
# Preferred encoder: libx264, h264_omx, h264_vaapi, h264_nvenc, h264_qsv, h264_v4l2m2m
# Leave empty to use the first detected hardware encoder, falling back to libx264.
preferred = ""
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.transcoder.ffmpeg_path, "ffmpeg");
        assert!(config.codec.preferred.is_empty());
    }

    #[test]
    fn test_sample_config_parses() {
        let config: ConfigFile = toml::from_str(&sample_config()).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ConfigFile = toml::from_str("[codec]\npreferred = \"h264_qsv\"\n").unwrap();
        assert_eq!(config.transcoder.ffmpeg_path, "ffmpeg");
        assert_eq!(config.codec.preferred, "h264_qsv");
    }
}
