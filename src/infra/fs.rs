//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as creating the output log file and resolving paths.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如创建输出日志文件和解析路径。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Creates (or truncates) the log file at `path`, ensuring its parent
/// directory exists first. Each run owns the file exclusively, so a rerun
/// overwrites rather than appends.
///
/// # Arguments
/// * `path` - Destination path of the log file
///
/// # Returns
/// The freshly created file, open for writing
///
/// 在 `path` 处创建（或截断）日志文件，并先确保其父目录存在。
/// 每次运行独占该文件，因此重新运行会覆盖而不是追加。
pub async fn create_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create log directory \"{}\"", parent.display()))?;
    }

    File::create(path)
        .await
        .with_context(|| format!("failed to create log file \"{}\"", path.display()))
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))
}
