//! Concrete H.264 encoder variants
//!
//! Each backend is a fixed table of invocation parameters. Adding a backend
//! means adding a type here and listing it in the registry.

use super::Codec;

/// Software encoder (x264)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Libx264Codec;

impl Codec for Libx264Codec {
    fn name(&self) -> &'static str {
        "libx264"
    }

    fn global_flags(&self) -> &'static [&'static str] {
        &[]
    }

    fn pixel_format(&self) -> &'static str {
        "yuv420p"
    }

    // zerolatency forces an I-frame into every segment; left off for x264.
    fn extra_arguments(&self) -> &'static [&'static str] {
        &[]
    }
}

/// OpenMAX encoder (Raspberry Pi and other SoCs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OmxCodec;

impl Codec for OmxCodec {
    fn name(&self) -> &'static str {
        "h264_omx"
    }

    fn global_flags(&self) -> &'static [&'static str] {
        &[]
    }

    fn pixel_format(&self) -> &'static str {
        "yuv420p"
    }

    fn extra_arguments(&self) -> &'static [&'static str] {
        &["-tune", "zerolatency"]
    }
}

/// VA-API encoder (Intel/AMD on Linux)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaapiCodec;

/// Render node used for VA-API encoding
pub const VAAPI_DEVICE: &str = "/dev/dri/renderD128";

impl Codec for VaapiCodec {
    fn name(&self) -> &'static str {
        "h264_vaapi"
    }

    fn global_flags(&self) -> &'static [&'static str] {
        &["-vaapi_device", VAAPI_DEVICE]
    }

    fn pixel_format(&self) -> &'static str {
        "vaapi_vld"
    }

    // Frames are converted to nv12 in software, then uploaded to the device.
    fn extra_arguments(&self) -> &'static [&'static str] {
        &["-vf", "format=nv12,hwupload"]
    }
}

/// NVIDIA NVENC encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NvencCodec;

impl Codec for NvencCodec {
    fn name(&self) -> &'static str {
        "h264_nvenc"
    }

    fn global_flags(&self) -> &'static [&'static str] {
        &["-hwaccel", "cuda"]
    }

    fn pixel_format(&self) -> &'static str {
        "yuv420p"
    }

    fn extra_arguments(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Intel Quick Sync encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuicksyncCodec;

impl Codec for QuicksyncCodec {
    fn name(&self) -> &'static str {
        "h264_qsv"
    }

    fn global_flags(&self) -> &'static [&'static str] {
        &[]
    }

    fn pixel_format(&self) -> &'static str {
        "nv12"
    }

    fn extra_arguments(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Video4Linux memory-to-memory encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V4l2m2mCodec;

impl Codec for V4l2m2mCodec {
    fn name(&self) -> &'static str {
        "h264_v4l2m2m"
    }

    fn global_flags(&self) -> &'static [&'static str] {
        &[]
    }

    fn pixel_format(&self) -> &'static str {
        "yuv420p"
    }

    fn extra_arguments(&self) -> &'static [&'static str] {
        &[]
    }
}
