//! codecprobe Core Library
//!
//! H.264 encoder capability detection for ffmpeg-based transcoders.
//!
//! This library provides:
//! - A model of the known H.264 encoder backends and their invocation parameters
//! - Detection of which of those encoders the local ffmpeg build supports
//! - Configuration for locating ffmpeg and choosing an encoder
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │ ffmpeg -encoders│───▶│ Detector (parse, │───▶│ Codec registry  │
//! │ (child process) │    │ catalog filter)  │    │ (args per codec)│
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```

pub mod codec;
pub mod config;
pub mod detect;
pub mod error;

pub use codec::{Codec, all_codecs, codec_by_name, default_codec};
pub use config::{ConfigFile, ProbeConfig};
pub use detect::{Detector, detect_available_codecs, detect_codecs, select_codec};
pub use error::{ProbeError, Result};
