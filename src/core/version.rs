//! # Version Extraction Module / 版本提取模块
//!
//! This module derives the product version from the C preprocessor
//! `#define` lines of the version header. The derived string is used only
//! to name the output log file; incomplete extraction never fails the run.
//!
//! 此模块从版本头文件的 C 预处理器 `#define` 行中推导产品版本。
//! 推导出的字符串仅用于命名输出日志文件；提取不完整绝不会使运行失败。

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static MAJOR_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bWINDSCRIBE_MAJOR_VERSION\s+(\d+)").unwrap());
static MINOR_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bWINDSCRIBE_MINOR_VERSION\s+(\d+)").unwrap());
static BUILD_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bWINDSCRIBE_BUILD_VERSION\s+(\d+)").unwrap());
static BETA_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#define\s+WINDSCRIBE_IS_BETA").unwrap());

/// The version fields extracted from the header. Any field the header does
/// not define stays at its zero default.
/// 从头文件中提取的版本字段。头文件未定义的字段保持其零默认值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    /// Pre-release marker: set when the header defines the beta flag.
    /// 预发布标记：当头文件定义 beta 标志时置位。
    pub beta: bool,
}

/// Renders the version tag used in the log file name:
/// `{major}_{minor:02}_build{build}` with an optional `_beta` suffix.
///
/// 渲染日志文件名中使用的版本标签：
/// `{major}_{minor:02}_build{build}`，可选 `_beta` 后缀。
impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:02}_build{}", self.major, self.minor, self.build)?;
        if self.beta {
            write!(f, "_beta")?;
        }
        Ok(())
    }
}

/// Reads the version header at `path` and scans it for the version fields.
/// A missing or unreadable header is an I/O error; unmatched fields are not.
///
/// 读取 `path` 处的版本头文件并扫描其中的版本字段。
/// 头文件缺失或不可读是 I/O 错误；字段未匹配则不是。
pub fn extract_app_version(path: &Path) -> Result<AppVersion> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read version header \"{}\"", path.display()))?;
    Ok(scan_header(&text))
}

/// Scans header text line by line, top to bottom, once. The first match
/// per pattern wins: later lines never override a field that has already
/// been captured. The beta marker has no capture group and is a pure
/// presence flag.
///
/// 逐行自上而下扫描头文件文本，只扫描一次。每个模式以首次匹配为准：
/// 后面的行绝不会覆盖已捕获的字段。beta 标记没有捕获组，是纯粹的存在性标志。
pub fn scan_header(text: &str) -> AppVersion {
    let mut major: Option<u32> = None;
    let mut minor: Option<u32> = None;
    let mut build: Option<u32> = None;
    let mut beta = false;

    for line in text.lines() {
        if capture_field(&MAJOR_VERSION, line, &mut major) {
            continue;
        }
        if capture_field(&MINOR_VERSION, line, &mut minor) {
            continue;
        }
        if capture_field(&BUILD_VERSION, line, &mut build) {
            continue;
        }
        if !beta && BETA_MARKER.is_match(line) {
            beta = true;
        }
    }

    AppVersion {
        major: major.unwrap_or(0),
        minor: minor.unwrap_or(0),
        build: build.unwrap_or(0),
        beta,
    }
}

/// Fills `slot` from the pattern's first capture group when the pattern
/// matches and the slot is still empty. Returns whether the line was
/// consumed by this pattern.
fn capture_field(pattern: &Regex, line: &str, slot: &mut Option<u32>) -> bool {
    if slot.is_some() {
        return false;
    }
    match pattern.captures(line) {
        Some(caps) => {
            *slot = caps[1].parse().ok();
            true
        }
        None => false,
    }
}
