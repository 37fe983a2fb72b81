//! Encoder capability detection
//!
//! Asks the transcoding tool for its encoder listing (`ffmpeg -encoders`),
//! picks out the H.264 rows, and keeps the identifiers present in the
//! supported-codec catalog.
//!
//! Detection never fails: if the tool cannot be run, the error is logged and
//! an empty list is returned. An empty list means "nothing detected".

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use tracing::{debug, error, info, trace};

use crate::codec::{self, Codec};
use crate::error::{ProbeError, Result};

/// Directive that makes ffmpeg print its registered encoders
pub const LIST_ENCODERS_ARG: &str = "-encoders";

/// Marker identifying H.264 rows in the encoder listing
pub const H264_MARKER: &str = "H.264";

/// Lines of output kept in a [`ProbeError::ToolFailed`]
pub const FAILURE_OUTPUT_LINES: usize = 5;

/// Extracts an encoder identifier from one line of tool output
pub type LineParser = fn(&str) -> Option<&str>;

/// Default line parser for ffmpeg's encoder listing
///
/// A row such as `V..... h264_nvenc   NVIDIA NVENC H.264 encoder` yields
/// `h264_nvenc`. Lines without the H.264 marker yield `None`, as do marker
/// lines with fewer than two fields.
pub fn h264_encoder_id(line: &str) -> Option<&str> {
    if !line.contains(H264_MARKER) {
        return None;
    }

    let id = line.split_whitespace().nth(1);
    if id.is_none() {
        trace!("Skipping malformed encoder line: {:?}", line);
    }
    id
}

/// Run `<tool> -encoders` and return its combined output
///
/// Standard output comes first, followed by standard error.
pub fn list_encoders(tool_path: impl AsRef<OsStr>) -> Result<String> {
    let tool_path = tool_path.as_ref();
    let tool = tool_path.to_string_lossy().into_owned();

    let output = Command::new(tool_path)
        .arg(LIST_ENCODERS_ARG)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ProbeError::spawn(tool.clone(), e))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        debug!("{} output before failure:\n{}", tool, text);
        return Err(ProbeError::ToolFailed {
            tool,
            status: output.status,
            output: last_lines(text.trim(), FAILURE_OUTPUT_LINES),
        });
    }

    Ok(text)
}

/// The final `count` lines of `text`
fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    lines[lines.len().saturating_sub(count)..].join("\n")
}

/// Extract supported encoder identifiers from an encoder listing
///
/// Order follows the listing. Identifiers not in the catalog are dropped.
pub fn parse_encoder_listing(output: &str, parser: LineParser) -> Vec<String> {
    let mut codecs = Vec::new();

    for line in output.lines() {
        let Some(id) = parser(line) else {
            continue;
        };

        if codec::is_supported(id) {
            debug!("Found supported encoder: {}", id);
            codecs.push(id.to_string());
        } else {
            debug!("Ignoring unsupported encoder: {}", id);
        }
    }

    codecs
}

/// Encoder detector bound to one transcoding tool
#[derive(Debug, Clone)]
pub struct Detector {
    tool_path: String,
    parser: LineParser,
}

impl Detector {
    /// Create a detector for the given tool, using the default line parser
    pub fn new(tool_path: impl Into<String>) -> Self {
        Self {
            tool_path: tool_path.into(),
            parser: h264_encoder_id,
        }
    }

    /// Replace the line parser
    pub fn with_parser(mut self, parser: LineParser) -> Self {
        self.parser = parser;
        self
    }

    /// Path of the tool this detector runs
    pub fn tool_path(&self) -> &str {
        &self.tool_path
    }

    /// Run the tool and return the supported encoders it reports
    pub fn detect(&self) -> Vec<String> {
        let output = match list_encoders(&self.tool_path) {
            Ok(output) => output,
            Err(e) => {
                error!("Encoder detection failed: {}", e);
                return Vec::new();
            }
        };

        let codecs = parse_encoder_listing(&output, self.parser);
        info!(
            "Detected {} supported encoder(s) via {}: {:?}",
            codecs.len(),
            self.tool_path,
            codecs
        );
        codecs
    }
}

/// Detect the supported H.264 encoders available through `tool_path`
pub fn detect_available_codecs(tool_path: impl Into<String>) -> Vec<String> {
    Detector::new(tool_path).detect()
}

/// Detect available encoders and resolve them to codec variants
pub fn detect_codecs(tool_path: impl Into<String>) -> Vec<&'static dyn Codec> {
    detect_available_codecs(tool_path)
        .iter()
        .filter_map(|name| codec::codec_by_name(name))
        .collect()
}

/// Pick the codec to encode with
///
/// With a preference, the preferred codec must be known and detected. Without
/// one, the first detected hardware encoder wins, falling back to the
/// software encoder.
pub fn select_codec(preferred: Option<&str>, available: &[String]) -> Result<&'static dyn Codec> {
    if let Some(name) = preferred {
        let codec = codec::codec_by_name(name).ok_or_else(|| ProbeError::unknown_codec(name))?;
        if !available.iter().any(|a| a == name) {
            return Err(ProbeError::unavailable(name));
        }
        return Ok(codec);
    }

    let chosen = available
        .iter()
        .filter_map(|name| codec::codec_by_name(name))
        .find(|codec| codec.is_hardware())
        .unwrap_or_else(codec::default_codec);

    debug!("Selected encoder: {}", chosen.name());
    Ok(chosen)
}
