//! Supported-codec catalog
//!
//! The allow-list of encoder identifiers codecprobe will ever report. Detection
//! results are filtered against it.

/// Encoder identifier to human-readable description
static SUPPORTED_CODECS: &[(&str, &str)] = &[
    ("libx264", "libx264"),
    ("h264_omx", "omx"),
    ("h264_vaapi", "vaapi"),
    ("h264_nvenc", "NVIDIA nvenc"),
    ("h264_qsv", "Intel Quicksync"),
    ("h264_v4l2m2m", "Video4Linux"),
];

/// All catalog entries as `(name, description)` pairs
pub fn supported_codecs() -> &'static [(&'static str, &'static str)] {
    SUPPORTED_CODECS
}

/// Check whether an encoder identifier is in the catalog
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_CODECS.iter().any(|(key, _)| *key == name)
}

/// Look up the description for an encoder identifier
pub fn description(name: &str) -> Option<&'static str> {
    SUPPORTED_CODECS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, desc)| *desc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(is_supported("h264_nvenc"));
        assert!(is_supported("libx264"));
        assert!(!is_supported("h264_videotoolbox"));
        assert!(!is_supported("H264_NVENC"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_description() {
        assert_eq!(description("h264_nvenc"), Some("NVIDIA nvenc"));
        assert_eq!(description("h264_qsv"), Some("Intel Quicksync"));
        assert_eq!(description("mpeg4"), None);
    }

    #[test]
    fn test_keys_unique() {
        let codecs = supported_codecs();
        for (i, (a, _)) in codecs.iter().enumerate() {
            assert!(!codecs[i + 1..].iter().any(|(b, _)| a == b), "duplicate key {}", a);
        }
    }
}
