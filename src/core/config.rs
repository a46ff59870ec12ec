use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::RunnerError;

/// Describes the GUI test executable named by the configuration.
/// 描述配置所指定的 GUI 测试可执行文件。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestGuiConfig {
    /// The display name of the test executable. It doubles as the on-disk
    /// file name under `<artifact-root>/gui/` (with `.exe` appended on
    /// windows) and as the prefix of the output log file.
    /// 测试可执行文件的显示名称。它同时用作 `<artifact-root>/gui/` 下的
    /// 磁盘文件名（在 windows 上附加 `.exe`），以及输出日志文件的前缀。
    pub name: String,
}

/// The runner configuration, loaded once from a TOML file at startup and
/// held in memory for the rest of the run.
/// 运行器配置，启动时从 TOML 文件加载一次，并在本次运行的剩余时间内保存在内存中。
#[derive(Debug, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The `[test-gui]` table naming the executable to run.
    /// 指定要运行的可执行文件的 `[test-gui]` 表。
    #[serde(rename = "test-gui")]
    pub test_gui: TestGuiConfig,
}

fn default_language() -> String {
    "en".to_string()
}

/// Loads the runner configuration from `path`.
///
/// A missing or malformed file maps to [`RunnerError::Config`], which
/// carries the configuration-specific process exit code.
///
/// 从 `path` 加载运行器配置。
///
/// 文件缺失或格式错误会映射为 [`RunnerError::Config`]，
/// 它携带配置专用的进程退出码。
pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerError> {
    let raw = fs::read_to_string(path).map_err(|e| RunnerError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str(&raw).map_err(|e| RunnerError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
