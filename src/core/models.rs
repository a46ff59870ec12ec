//! # Data Models Module / 数据模型模块
//!
//! This module defines the result and error types used throughout the
//! runner. Errors that end the run carry their own process exit code, so
//! the mapping from failure kind to exit code lives in one place.
//!
//! 此模块定义了整个运行器中使用的结果和错误类型。
//! 终止运行的错误携带自己的进程退出码，因此从失败种类到退出码的映射集中在一处。

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::core::version::AppVersion;

/// Exit code used when the configuration file is missing or malformed.
/// 配置文件缺失或格式错误时使用的退出码。
pub const EXIT_CONFIG: u8 = 2;

/// Exit code used when the test executable is absent from the artifact tree.
/// 测试可执行文件不在产物目录树中时使用的退出码。
pub const EXIT_MISSING_EXECUTABLE: u8 = 3;

/// Fatal errors with an error-kind-specific exit code. Everything else
/// (header I/O, log creation, spawn failure) propagates as a plain
/// `anyhow::Error` and exits with code 1.
///
/// 带有按错误种类区分的退出码的致命错误。其他一切
/// （头文件 I/O、日志创建、派生失败）作为普通的 `anyhow::Error` 传播，
/// 并以退出码 1 退出。
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The configuration file could not be read or parsed.
    /// 无法读取或解析配置文件。
    #[error("failed to load config \"{}\": {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// The test executable does not exist at its exact expected path.
    /// There is no search or fallback.
    /// 测试可执行文件不存在于其预期的确切路径。没有搜索或回退。
    #[error("could not find test gui executable at \"{}\"", .path.display())]
    MissingExecutable { path: PathBuf },
}

impl RunnerError {
    /// The process exit code this error maps to.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunnerError::Config { .. } => EXIT_CONFIG,
            RunnerError::MissingExecutable { .. } => EXIT_MISSING_EXECUTABLE,
        }
    }
}

/// Everything a completed run produced, threaded back through the call
/// chain instead of being stashed in module-level state.
///
/// 一次完成的运行所产生的全部结果，通过调用链显式传回，
/// 而不是存放在模块级状态中。
#[derive(Debug)]
pub struct RunReport {
    /// The on-disk path of the executable that was run.
    /// 被运行的可执行文件的磁盘路径。
    pub executable: PathBuf,
    /// The log file holding the child's combined output.
    /// 保存子进程合并输出的日志文件。
    pub log_path: PathBuf,
    /// The version extracted from the header, used to name the log file.
    /// 从头文件中提取的版本，用于命名日志文件。
    pub version: AppVersion,
    /// The child's own exit status. Informational only: a non-zero status
    /// does not fail the run.
    /// 子进程自身的退出状态。仅供参考：非零状态不会使运行失败。
    pub status: ExitStatus,
}

/// The outcome of the orchestration: either the run completed, or the
/// platform is outside the supported set and the whole step was skipped.
/// A skip is success-as-no-op, not an error.
///
/// 编排的结果：要么运行完成，要么平台不在受支持的集合内、整个步骤被跳过。
/// 跳过是"无操作的成功"，不是错误。
#[derive(Debug)]
pub enum RunOutcome {
    /// The executable was located, run to completion, and logged.
    /// 可执行文件已被定位、运行完毕并记录日志。
    Completed(RunReport),
    /// The resolved platform is unsupported; nothing was located or spawned.
    /// 解析出的平台不受支持；未定位也未派生任何程序。
    SkippedPlatform { platform: String },
}

impl RunOutcome {
    /// Whether the run was skipped for an unsupported platform.
    pub fn is_skipped(&self) -> bool {
        matches!(self, RunOutcome::SkippedPlatform { .. })
    }

    /// The report of a completed run, if any.
    pub fn report(&self) -> Option<&RunReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::SkippedPlatform { .. } => None,
        }
    }
}
