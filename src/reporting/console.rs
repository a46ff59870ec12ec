//! # Console Reporting Module / 控制台报告模块
//!
//! This module owns every user-facing console line the runner prints:
//! the run banner, the platform-skip notice, the success confirmation,
//! error reporting, and the final elapsed-time line.
//!
//! 此模块拥有运行器打印的每一行面向用户的控制台输出：
//! 运行横幅、平台跳过通知、成功确认、错误报告以及最终的耗时行。

use std::process::ExitStatus;
use std::time::Duration;

use colored::*;

use crate::infra::t;

/// Prints the banner announcing which executable is about to run.
pub fn print_run_banner(name: &str) {
    println!("{}", t!("run.starting", name = name).blue());
}

/// Prints the skip notice for an unsupported platform. A skip is a
/// success-as-no-op, so this goes to stdout, not stderr.
///
/// 打印不受支持平台的跳过通知。跳过是"无操作的成功"，
/// 因此输出到 stdout 而不是 stderr。
pub fn print_platform_skip(platform: &str) {
    println!("{}", t!("run.skip_platform", platform = platform).yellow());
}

/// Prints a notice when the child exited with a non-zero status. The run
/// still counts as successful; the notice keeps the condition visible in
/// pipeline logs.
///
/// 当子进程以非零状态退出时打印通知。运行仍然算作成功；
/// 该通知使这一情况在流水线日志中保持可见。
pub fn print_child_status(name: &str, status: ExitStatus) {
    if !status.success() {
        println!(
            "{}",
            t!("run.child_status", name = name, status = status).yellow()
        );
    }
}

/// Prints the confirmation message naming the executable that ran.
pub fn print_success(name: &str) {
    println!("{}", t!("run.success", name = name).green());
}

/// Prints a bubbled-up error with its context chain.
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", t!("error_prefix").red().bold(), error);
}

/// Formats the wall-clock elapsed time of the whole run: minutes plus
/// seconds when at least a minute passed, seconds only otherwise.
///
/// 格式化整个运行的墙钟耗时：至少过去一分钟时显示分加秒，否则只显示秒。
///
/// # Examples / 示例
/// ```text
/// All done: 42 seconds elapsed
/// All done: 2 minutes 13 seconds elapsed
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs >= 60 {
        let minutes = secs / 60;
        let seconds = secs % 60;
        t!("elapsed_minutes", minutes = minutes, seconds = seconds).to_string()
    } else {
        t!("elapsed_seconds", seconds = secs).to_string()
    }
}

/// Prints the elapsed-time line, emitted immediately before the process
/// exits on both the success and the error path.
pub fn print_elapsed(elapsed: Duration) {
    println!("{}", format_elapsed(elapsed).bold());
}
