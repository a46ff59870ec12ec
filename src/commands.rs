//! # Commands Module / 命令模块
//!
//! This module contains the command implementations for the GUI Test Runner CLI.
//!
//! 此模块包含 GUI 测试运行器 CLI 的命令实现。

pub mod run;
