//! # Execution Module / 执行模块
//!
//! This module locates the prebuilt test executable and runs it as a child
//! process with its combined output streamed to the log file in real time.
//!
//! 此模块定位预先构建的测试可执行文件，并将其作为子进程运行，
//! 其合并输出被实时流式写入日志文件。

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::{Context, Result};
use colored::*;
use tokio::process::Command;

use crate::core::models::RunnerError;
use crate::infra::{command, fs, t};

/// Builds the exact on-disk path of the test executable:
/// `<artifact-dir>/gui/<name>`, with `.exe` appended only on windows.
/// There is no search or fallback; a missing file is
/// [`RunnerError::MissingExecutable`].
///
/// 构建测试可执行文件的确切磁盘路径：
/// `<artifact-dir>/gui/<name>`，仅在 windows 上附加 `.exe`。
/// 没有搜索或回退；文件缺失即为 [`RunnerError::MissingExecutable`]。
pub fn locate_executable(
    artifact_dir: &Path,
    name: &str,
    platform: &str,
) -> Result<PathBuf, RunnerError> {
    let file_name = if platform == "windows" {
        format!("{name}.exe")
    } else {
        name.to_string()
    };
    let path = artifact_dir.join("gui").join(file_name);

    if !path.exists() {
        return Err(RunnerError::MissingExecutable { path });
    }

    Ok(path)
}

/// Runs the located executable with no arguments, streaming its combined
/// stdout/stderr into a freshly truncated log file at `log_path`, and
/// blocks until the child terminates.
///
/// The child's own exit status is returned for reporting but is not a
/// failure signal; only launch failures surface as errors.
///
/// 以无参数方式运行已定位的可执行文件，将其合并的 stdout/stderr
/// 流式写入 `log_path` 处新截断的日志文件，并阻塞直到子进程终止。
///
/// 子进程自身的退出状态会返回用于报告，但不是失败信号；
/// 只有启动失败才会作为错误浮出。
pub async fn run_gui_test(executable: &Path, log_path: &Path) -> Result<ExitStatus> {
    let log_file = fs::create_log_file(log_path).await?;

    println!("{}", t!("run.writing_log", path = log_path.display()).blue());

    let mut cmd = Command::new(executable);
    cmd.kill_on_drop(true);

    let status = command::spawn_and_stream(cmd, log_file)
        .await
        .with_context(|| format!("failed to run \"{}\"", executable.display()))?;

    Ok(status)
}
