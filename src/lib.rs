//! # GUI Test Runner Library / GUI 测试运行器库
//!
//! This library provides the core functionality for the GUI Test Runner tool,
//! a single-purpose build-pipeline step that locates a previously built GUI
//! test executable, derives a product version string from a C header file,
//! runs the executable while streaming its output to a log file, and maps
//! the outcome to a process exit code.
//!
//! 此库为 GUI 测试运行器工具提供核心功能，
//! 这是一个单一用途的构建流水线步骤：定位先前构建的 GUI 测试可执行文件，
//! 从 C 头文件中推导产品版本字符串，运行该可执行文件并将其输出流式写入日志文件，
//! 最后将结果映射为进程退出码。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, version extraction, and execution logic
//! - `infra` - Infrastructure services like process spawning and file system operations
//! - `reporting` - Console reporting and elapsed-time formatting
//! - `cli` - Command-line interface
//! - `commands` - Command implementations
//!
//! - `core` - 配置、版本提取和执行逻辑
//! - `infra` - 基础设施服务，如进程派生和文件系统操作
//! - `reporting` - 控制台报告和耗时格式化
//! - `cli` - 命令行接口
//! - `commands` - 命令实现

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::models;
pub use crate::core::version;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
