//! 子进程生命周期指标
//!
//! 未安装 recorder 时，`metrics` 宏均为空操作。

use std::time::Duration;

use metrics::{counter, gauge};

/// 记录子进程启动
pub fn record_process_started(process: &str) {
    counter!(
        "picam_streamer_process_started_total",
        "process" => process.to_string()
    )
    .increment(1);
}

/// 记录子进程退出
///
/// `success` 为 false 表示非零退出码、被信号终止或等待失败。
pub fn record_process_exited(process: &str, success: bool, runtime: Duration) {
    counter!(
        "picam_streamer_process_exited_total",
        "process" => process.to_string(),
        "status" => status_label(success)
    )
    .increment(1);

    gauge!(
        "picam_streamer_process_runtime_seconds",
        "process" => process.to_string()
    )
    .set(runtime.as_secs_f64());
}

fn status_label(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failure"
    }
}
