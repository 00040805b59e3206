//! Fixed values baked into the two command lines.

/// Name of the configuration file, looked up next to the executable
pub const CONFIG_FILENAME: &str = "config.json";

/// Camera capture tool
pub const RASPIVID_BIN_PATH: &str = "/usr/bin/raspivid";

/// Transcoder
pub const FFMPEG_BIN_PATH: &str = "/usr/local/bin/ffmpeg";

/// Process name used in log lines and metrics labels
pub const CAPTURE_PROCESS_NAME: &str = "raspivid";

/// Process name used in log lines and metrics labels
pub const TRANSCODER_PROCESS_NAME: &str = "ffmpeg";

// ===== Capture =====

pub const CAPTURE_FRAME_RATE: u32 = 30;

/// Bits per second
pub const CAPTURE_BITRATE: u32 = 6_000_000;

// ===== Transcoder =====

pub const AUDIO_SAMPLE_RATE: u32 = 44_100;

pub const AUDIO_CHANNELS: u32 = 2;

pub const AUDIO_BITRATE: &str = "128k";

/// Frames per keyframe
pub const KEYFRAME_INTERVAL: u32 = 60;

/// Device the silent PCM track is read from
pub const SILENT_AUDIO_SOURCE: &str = "/dev/zero";

/// The stream key is appended as the final path segment
pub const STREAM_URL_PREFIX: &str = "rtmp://a.rtmp.youtube.com/live2/";
