//! # Run Command Module / 运行命令模块
//!
//! This module implements the single command of the GUI Test Runner: a
//! strictly linear sequence from configuration to child execution, with
//! one early-exit branch for unsupported platforms.
//!
//! 此模块实现 GUI 测试运行器的唯一命令：从配置到子进程执行的严格线性序列，
//! 以及一个针对不受支持平台的提前退出分支。

use anyhow::Result;
use std::path::PathBuf;

use crate::{
    core::{
        config, execution,
        models::{RunOutcome, RunReport},
        version,
    },
    infra::fs,
    reporting::console,
};

/// Platforms the GUI test is built for. Anything else skips with exit 0.
/// GUI 测试所面向的平台。其他平台一律以退出码 0 跳过。
pub const SUPPORTED_PLATFORMS: [&str; 2] = ["windows", "macos"];

/// Everything the run needs, resolved from the CLI and threaded through
/// the orchestration explicitly.
///
/// 运行所需的一切，由 CLI 解析并通过编排显式传递。
#[derive(Debug)]
pub struct RunOptions {
    /// Path of the configuration file.
    pub config: PathBuf,
    /// Project root the default artifact and header paths derive from.
    pub root: PathBuf,
    /// Artifact root override; defaults to `<root>/test-exe`.
    pub artifact_dir: Option<PathBuf>,
    /// Version header override; defaults to
    /// `<root>/common/version/windscribe_version.h`.
    pub header: Option<PathBuf>,
    /// Resolved platform identifier, normally the detected operating system.
    pub platform: String,
}

/// Executes the whole run: platform guard, configuration load, executable
/// lookup, version extraction, log preparation, child execution, report.
///
/// # Arguments
/// * `opts` - The resolved run options
///
/// # Returns
/// The tagged outcome of the run; fatal problems bubble as errors
///
/// 执行整个运行：平台守卫、配置加载、可执行文件查找、版本提取、
/// 日志准备、子进程执行、报告。
///
/// # Arguments
/// * `opts` - 已解析的运行选项
///
/// # Returns
/// 本次运行的带标签结果；致命问题作为错误向上传播
pub async fn execute(opts: RunOptions) -> Result<RunOutcome> {
    // The guard runs before the configuration is loaded: a broken config
    // must not fail a platform that skips anyway.
    // 守卫在加载配置之前运行：损坏的配置不得使本就要跳过的平台失败。
    if !SUPPORTED_PLATFORMS.contains(&opts.platform.as_str()) {
        console::print_platform_skip(&opts.platform);
        return Ok(RunOutcome::SkippedPlatform {
            platform: opts.platform,
        });
    }

    let config = config::load_runner_config(&opts.config)?;
    rust_i18n::set_locale(&config.language);

    console::print_run_banner(&config.test_gui.name);

    let (artifact_dir, header) = resolve_paths(&opts)?;

    let executable =
        execution::locate_executable(&artifact_dir, &config.test_gui.name, &opts.platform)?;
    let version = version::extract_app_version(&header)?;

    let log_path = artifact_dir
        .join("gui")
        .join(format!("{}-{}.log", config.test_gui.name, version));

    let status = execution::run_gui_test(&executable, &log_path).await?;

    console::print_child_status(&config.test_gui.name, status);
    console::print_success(&config.test_gui.name);

    Ok(RunOutcome::Completed(RunReport {
        executable,
        log_path,
        version,
        status,
    }))
}

/// Resolves the artifact and header paths, falling back to the fixed
/// layout under the project root when no override was given. The root is
/// only touched when a fallback is actually needed.
///
/// 解析产物和头文件路径，在未给出覆盖值时回退到项目根目录下的固定布局。
/// 只有在确实需要回退时才会访问根目录。
fn resolve_paths(opts: &RunOptions) -> Result<(PathBuf, PathBuf)> {
    match (&opts.artifact_dir, &opts.header) {
        (Some(artifact_dir), Some(header)) => Ok((artifact_dir.clone(), header.clone())),
        (artifact_dir, header) => {
            let root = fs::absolute_path(&opts.root)?;
            Ok((
                artifact_dir
                    .clone()
                    .unwrap_or_else(|| root.join("test-exe")),
                header.clone().unwrap_or_else(|| {
                    root.join("common").join("version").join("windscribe_version.h")
                }),
            ))
        }
    }
}
