//! Error types for codecprobe

use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Main error type for codecprobe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The transcoding tool could not be started
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The transcoding tool ran but exited unsuccessfully
    #[error("{tool} exited with {status}: {output}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        output: String,
    },

    /// Name does not match any known codec variant
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    /// Codec is known but was not detected on this host
    #[error("Codec not available on this system: {0}")]
    CodecUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ProbeError>,
    },
}

impl ProbeError {
    /// Create a spawn error for the given tool
    pub fn spawn(tool: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            tool: tool.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown codec error
    pub fn unknown_codec(name: impl Into<String>) -> Self {
        Self::UnknownCodec(name.into())
    }

    /// Create an unavailable codec error
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self::CodecUnavailable(name.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Suggested remediation for the user, if any
    pub fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Spawn { .. } => {
                Some("Make sure ffmpeg is installed, or set ffmpeg_path in config.toml")
            }
            Self::ToolFailed { .. } => {
                Some("Run `ffmpeg -encoders` manually to see why the tool is failing")
            }
            Self::UnknownCodec(_) => Some("Run `codecprobe list` to see the known codecs"),
            Self::CodecUnavailable(_) => {
                Some("Run `codecprobe detect` to see which codecs this system supports")
            }
            Self::Config(_) => Some(
                "Check your config.toml, or regenerate it with `codecprobe config init --force`",
            ),
            Self::Io(_) => None,
            Self::WithContext { source, .. } => source.user_hint(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
