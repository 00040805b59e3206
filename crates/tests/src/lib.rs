//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - config.json -> Settings -> 命令行参数
//! - 使用 /bin/sh 替身程序的端到端管道测试（无需 raspivid / ffmpeg）

#[cfg(test)]
mod config_tests {
    use config_loader::ConfigLoader;
    use contracts::ContractError;

    #[test]
    fn test_missing_config_fails_before_anything_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = ConfigLoader::config_path_in(dir.path());

        let err = ConfigLoader::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ContractError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_config_drives_both_command_lines() {
        let content = r#"{
            "youtube_stream_key": "k3y/with-slash",
            "video_width": 1296,
            "video_height": 972,
            "video_rotation": 180,
            "video_exposure": "sports",
            "video_awb": "cloud",
            "is_verbose": false,
            "comment": "ignored"
        }"#;
        let settings = ConfigLoader::load_from_str(content).unwrap();

        let capture = launcher::capture_args(&settings);
        assert_eq!(
            &capture[8..],
            ["-w", "1296", "-h", "972", "-rot", "180", "-ex", "sports", "-awb", "cloud"]
        );

        let transcoder = launcher::transcoder_args(&settings);
        assert_eq!(
            transcoder.last().unwrap(),
            "rtmp://a.rtmp.youtube.com/live2/k3y/with-slash"
        );
    }
}

#[cfg(all(test, unix))]
mod e2e_tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use contracts::Settings;
    use launcher::{LaunchError, Pipeline, PipelineConfig};
    use tempfile::TempDir;

    /// Writing an executable while another thread forks can leak the open
    /// write fd into that child and make exec fail with ETXTBSY.
    static SPAWN_LOCK: Mutex<()> = Mutex::new(());

    fn lock() -> MutexGuard<'static, ()> {
        SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settings() -> Settings {
        Settings {
            youtube_stream_key: "e2e-key".to_string(),
            video_width: 1280,
            video_height: 720,
            video_rotation: 90,
            video_exposure: "auto".to_string(),
            video_awb: "horizon".to_string(),
            is_verbose: true,
        }
    }

    /// Executable `/bin/sh` script standing in for raspivid or ffmpeg
    fn stand_in(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn file_in(dir: &TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[tokio::test]
    async fn test_capture_output_reaches_transcoder() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let received = file_in(&dir, "received");

        let capture = stand_in(dir.path(), "raspivid", "printf 'h264-frames'");
        let transcoder = stand_in(
            dir.path(),
            "ffmpeg",
            &format!("cat > '{}'", received.display()),
        );

        let config = PipelineConfig::new(settings()).with_programs(capture, transcoder);
        let stats = Pipeline::new(config).run().await.unwrap();

        // cat only returns once the write end is closed
        assert!(stats.transcoder.success());
        assert_eq!(fs::read_to_string(&received).unwrap(), "h264-frames");
    }

    #[tokio::test]
    async fn test_arguments_reach_processes_in_order() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let capture_log = file_in(&dir, "capture_args");
        let transcoder_log = file_in(&dir, "transcoder_args");

        let capture = stand_in(
            dir.path(),
            "raspivid",
            &format!("printf '%s\\n' \"$@\" > '{}'", capture_log.display()),
        );
        let transcoder = stand_in(
            dir.path(),
            "ffmpeg",
            &format!(
                "printf '%s\\n' \"$@\" > '{}'\ncat > /dev/null",
                transcoder_log.display()
            ),
        );

        let settings = settings();
        let config = PipelineConfig::new(settings.clone()).with_programs(capture, transcoder);
        Pipeline::new(config).run().await.unwrap();

        let capture_args = fs::read_to_string(&capture_log).unwrap();
        assert_eq!(
            capture_args.lines().collect::<Vec<_>>(),
            launcher::capture_args(&settings)
        );

        let transcoder_args = fs::read_to_string(&transcoder_log).unwrap();
        let lines: Vec<_> = transcoder_args.lines().collect();
        assert_eq!(lines, launcher::transcoder_args(&settings));
        assert_eq!(lines.last(), Some(&"rtmp://a.rtmp.youtube.com/live2/e2e-key"));
    }

    #[tokio::test]
    async fn test_capture_start_failure_never_starts_transcoder() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let marker = file_in(&dir, "transcoder_started");

        let transcoder = stand_in(
            dir.path(),
            "ffmpeg",
            &format!("touch '{}'", marker.display()),
        );

        let config = PipelineConfig::new(settings())
            .with_programs(dir.path().join("no-such-raspivid"), transcoder);
        let err = Pipeline::new(config).run().await.unwrap_err();

        assert!(matches!(err, LaunchError::ProcessStart { ref process, .. } if process == "raspivid"));
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_transcoder_nonzero_exit_is_reported_not_fatal() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();

        let capture = stand_in(dir.path(), "raspivid", "printf 'data'");
        let transcoder = stand_in(dir.path(), "ffmpeg", "cat > /dev/null\nexit 3");

        let config = PipelineConfig::new(settings()).with_programs(capture, transcoder);
        let stats = Pipeline::new(config).run().await.unwrap();

        assert!(!stats.transcoder.success());
        assert_eq!(stats.transcoder.outcome.code(), Some(3));
        assert_eq!(
            stats.transcoder.exit_error().unwrap().to_string(),
            "ffmpeg finished with error: exit status: 3"
        );
    }

    /// Current behavior for a capture process that starts and then fails:
    /// the transcoder still gets EOF and the run ends normally. Whether this
    /// should be fatal is left open.
    #[tokio::test]
    async fn test_capture_runtime_failure_is_not_fatal() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let received = file_in(&dir, "received");

        let capture = stand_in(dir.path(), "raspivid", "printf 'partial'\nexit 2");
        let transcoder = stand_in(
            dir.path(),
            "ffmpeg",
            &format!("cat > '{}'", received.display()),
        );

        let config = PipelineConfig::new(settings()).with_programs(capture, transcoder);
        let stats = Pipeline::new(config).run().await.unwrap();

        assert!(stats.transcoder.success());
        assert_eq!(fs::read_to_string(&received).unwrap(), "partial");
        // the capture task may not have finished its bookkeeping yet
        if let Some(capture) = stats.capture {
            assert_eq!(capture.outcome.code(), Some(2));
        }
    }
}
