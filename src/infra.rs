//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the GUI Test Runner,
//! including process spawning with real-time output streaming, file system
//! operations, and i18n support.
//!
//! 此模块为 GUI 测试运行器提供基础设施服务，
//! 包括带实时输出流式写入的进程派生、文件系统操作和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
