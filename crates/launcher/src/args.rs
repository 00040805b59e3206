//! Command-line construction for the two child processes.
//!
//! Token order is fixed; `Settings` values are inserted verbatim.

use contracts::{
    Settings, AUDIO_BITRATE, AUDIO_CHANNELS, AUDIO_SAMPLE_RATE, CAPTURE_BITRATE,
    CAPTURE_FRAME_RATE, KEYFRAME_INTERVAL, SILENT_AUDIO_SOURCE, STREAM_URL_PREFIX,
};

/// Arguments for `raspivid`
pub fn capture_args(settings: &Settings) -> Vec<String> {
    vec![
        // H.264 to stdout, run until killed
        "-o".into(),
        "-".into(),
        "-t".into(),
        "0".into(),
        "-fps".into(),
        CAPTURE_FRAME_RATE.to_string(),
        "-b".into(),
        CAPTURE_BITRATE.to_string(),
        // from config
        "-w".into(),
        settings.video_width.to_string(),
        "-h".into(),
        settings.video_height.to_string(),
        "-rot".into(),
        settings.video_rotation.to_string(),
        "-ex".into(),
        settings.video_exposure.clone(),
        "-awb".into(),
        settings.video_awb.clone(),
    ]
}

/// Arguments for `ffmpeg`
///
/// Silent s16le PCM from `/dev/zero` is muxed with raw H.264 from stdin.
/// Audio is encoded to AAC, video is copied, and the result is pushed as FLV
/// to the ingest URL.
pub fn transcoder_args(settings: &Settings) -> Vec<String> {
    vec![
        "-re".into(),
        "-ar".into(),
        AUDIO_SAMPLE_RATE.to_string(),
        "-ac".into(),
        AUDIO_CHANNELS.to_string(),
        "-acodec".into(),
        "pcm_s16le".into(),
        "-f".into(),
        "s16le".into(),
        "-ac".into(),
        AUDIO_CHANNELS.to_string(),
        "-i".into(),
        SILENT_AUDIO_SOURCE.into(),
        "-f".into(),
        "h264".into(),
        "-i".into(),
        "-".into(),
        "-vcodec".into(),
        "copy".into(),
        "-acodec".into(),
        "aac".into(),
        "-ab".into(),
        AUDIO_BITRATE.into(),
        "-g".into(),
        KEYFRAME_INTERVAL.to_string(),
        "-strict".into(),
        "experimental".into(),
        "-f".into(),
        "flv".into(),
        stream_url(&settings.youtube_stream_key),
    ]
}

/// RTMP ingest URL for a stream key
pub fn stream_url(stream_key: &str) -> String {
    format!("{STREAM_URL_PREFIX}{stream_key}")
}
