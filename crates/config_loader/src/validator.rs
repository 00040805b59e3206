//! 配置检查模块
//!
//! 仅产生警告，不会拒绝配置。检查项：
//! - stream key 非空
//! - 分辨率非零
//! - 旋转角度属于 {0, 90, 180, 270}
//! - exposure / awb 非空

use contracts::Settings;

/// Rotations raspivid accepts
pub const SUPPORTED_ROTATIONS: [i32; 4] = [0, 90, 180, 270];

/// 收集配置警告（非致命问题）
pub fn collect_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    if settings.youtube_stream_key.is_empty() {
        warnings.push("youtube_stream_key is empty - the ingest URL has no key".to_string());
    }

    if settings.video_width == 0 || settings.video_height == 0 {
        warnings.push(format!(
            "video resolution is {}x{} - raspivid will fall back to its own defaults or fail",
            settings.video_width, settings.video_height
        ));
    }

    if !SUPPORTED_ROTATIONS.contains(&settings.video_rotation) {
        warnings.push(format!(
            "video_rotation {} is not one of {:?}",
            settings.video_rotation, SUPPORTED_ROTATIONS
        ));
    }

    if settings.video_exposure.is_empty() {
        warnings.push("video_exposure is empty - raspivid expects a mode after -ex".to_string());
    }

    if settings.video_awb.is_empty() {
        warnings.push("video_awb is empty - raspivid expects a mode after -awb".to_string());
    }

    warnings
}
