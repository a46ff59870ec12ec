//! # Reporting Module / 报告模块
//!
//! This module handles user-facing output for the GUI Test Runner.
//!
//! 此模块处理 GUI 测试运行器面向用户的输出。

pub mod console;
