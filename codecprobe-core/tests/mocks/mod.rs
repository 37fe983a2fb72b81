//! Mock infrastructure for testing
//!
//! Provides captured encoder listings and fake transcoding tools.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

/// Excerpt of `ffmpeg -encoders` from a Linux build with VA-API and NVENC
pub const FFMPEG_LINUX_LISTING: &str = "\
Encoders:
 V..... = Video
 A..... = Audio
 S..... = Subtitle
 .F.... = Frame-level multithreading
 ..S... = Slice-level multithreading
 ...X.. = Codec is experimental
 ....B. = Supports draw_horiz_band
 .....D = Supports direct rendering method 1
 ------
 V....D libx264              libx264 H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10 (codec h264)
 V....D libx264rgb           libx264 H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10 RGB (codec h264)
 V....D h264_nvenc           NVIDIA NVENC H.264 encoder (codec h264)
 V..... h264_v4l2m2m         V4L2 mem2mem H.264 encoder wrapper (codec h264)
 V....D h264_vaapi           H.264/AVC (VAAPI) (codec h264)
 V....D hevc_nvenc           NVIDIA NVENC hevc encoder (codec hevc)
 V.S... mpeg4                MPEG-4 part 2
 V....D libvpx-vp9           libvpx VP9 (codec vp9)
 A....D aac                  AAC (Advanced Audio Coding)
";

/// Supported encoders in `FFMPEG_LINUX_LISTING`, in listing order
pub const FFMPEG_LINUX_EXPECTED: [&str; 4] =
    ["libx264", "h264_nvenc", "h264_v4l2m2m", "h264_vaapi"];

/// Excerpt of `ffmpeg -encoders` from a macOS build
pub const FFMPEG_MACOS_LISTING: &str = "\
 ------
 V....D libx264              libx264 H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10 (codec h264)
 V....D h264_videotoolbox    VideoToolbox H.264 Encoder (codec h264)
 V....D hevc_videotoolbox    VideoToolbox H.265 Encoder (codec hevc)
";

/// Serializes writing and running fake tools within one test binary
///
/// Executing a script while another thread still holds it open for writing
/// fails with ETXTBSY.
pub static TOOL_LOCK: Mutex<()> = Mutex::new(());

/// A fake transcoding tool backed by a shell script in a temporary directory
pub struct FakeTool {
    _dir: TempDir,
    path: PathBuf,
}

impl FakeTool {
    /// Fake tool that prints `stdout` and `stderr`, then exits with `code`
    #[cfg(unix)]
    pub fn new(stdout: &str, stderr: &str, code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ffmpeg");

        std::fs::write(dir.path().join("stdout.txt"), stdout).expect("write stdout fixture");
        std::fs::write(dir.path().join("stderr.txt"), stderr).expect("write stderr fixture");

        let script = format!(
            "#!/bin/sh\n[ \"$1\" = \"-encoders\" ] || exit 64\ncat '{dir}/stdout.txt'\ncat '{dir}/stderr.txt' >&2\nexit {code}\n",
            dir = dir.path().display(),
            code = code,
        );
        std::fs::write(&path, script).expect("write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("make fake tool executable");

        Self { _dir: dir, path }
    }

    /// Fake tool that prints a listing and exits successfully
    #[cfg(unix)]
    pub fn with_listing(listing: &str) -> Self {
        Self::new(listing, "", 0)
    }

    /// Path to the fake executable
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as a string, for APIs that take one
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// A tool path guaranteed not to exist
pub fn missing_tool() -> String {
    "/nonexistent/codecprobe-test/ffmpeg-does-not-exist".to_string()
}

/// Take the fake tool lock, ignoring poisoning from a failed test
pub fn lock_tools() -> std::sync::MutexGuard<'static, ()> {
    TOOL_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: std::sync::Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Run `f` with a subscriber writing into this capture
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Everything logged so far
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
