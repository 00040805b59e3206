//! Settings - Config Loader output
//!
//! Flat record decoded from `config.json`. Immutable after load.

use serde::{Deserialize, Serialize};

/// Streamer settings
///
/// Every field falls back to its zero value when absent; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stream key appended to the RTMP ingest URL
    pub youtube_stream_key: String,

    /// Capture width in pixels
    pub video_width: u32,

    /// Capture height in pixels
    pub video_height: u32,

    /// Image rotation in degrees (0, 90, 180 or 270 by raspivid convention)
    pub video_rotation: i32,

    /// Exposure mode token passed to `-ex` (e.g. "auto", "night")
    pub video_exposure: String,

    /// White balance token passed to `-awb` (e.g. "auto", "sun")
    pub video_awb: String,

    /// Log full argument lists when processes start
    pub is_verbose: bool,
}

impl Settings {
    /// Stream key with all but the last four characters masked
    pub fn masked_stream_key(&self) -> String {
        let chars: Vec<char> = self.youtube_stream_key.chars().collect();
        let visible = chars.len().min(4);
        let hidden = chars.len() - visible;
        let mut masked = "*".repeat(hidden);
        masked.extend(&chars[hidden..]);
        masked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_zero_values() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.youtube_stream_key, "");
        assert_eq!(settings.video_width, 0);
        assert!(!settings.is_verbose);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let content = r#"{ "video_width": 1280, "camera_model": "v2", "extra": [1, 2] }"#;
        let settings: Settings = serde_json::from_str(content).unwrap();
        assert_eq!(settings.video_width, 1280);
        assert_eq!(settings.video_height, 0);
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let result: Result<Settings, _> = serde_json::from_str(r#"{ "video_width": "wide" }"#);
        assert!(result.is_err());

        let result: Result<Settings, _> = serde_json::from_str(r#"{ "video_height": -720 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_masked_stream_key() {
        let settings = Settings {
            youtube_stream_key: "abcd-efgh-1234".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.masked_stream_key(), "**********1234");

        let short = Settings {
            youtube_stream_key: "xy".to_string(),
            ..Default::default()
        };
        assert_eq!(short.masked_stream_key(), "xy");
        assert_eq!(Settings::default().masked_stream_key(), "");
    }
}
