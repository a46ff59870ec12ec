//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module, testing the
//! `RunnerConfig` structure, its defaults, and the error mapping of
//! `load_runner_config`.
//!
//! 此模块包含 `config.rs` 模块的单元测试，测试 `RunnerConfig` 结构体、
//! 其默认值以及 `load_runner_config` 的错误映射。

use gui_test_runner::config::{load_runner_config, RunnerConfig};
use gui_test_runner::models::{RunnerError, EXIT_CONFIG};

#[cfg(test)]
mod runner_config_tests {
    use super::*;

    #[test]
    fn test_minimal_config_defaults_language() {
        let toml_str = r#"
            [test-gui]
            name = "TestGui"
        "#;

        let config: RunnerConfig = toml::from_str(toml_str).unwrap();

        // Should default to "en" when language is not specified
        assert_eq!(config.language, "en");
        assert_eq!(config.test_gui.name, "TestGui");
    }

    #[test]
    fn test_explicit_language() {
        let toml_str = r#"
            language = "zh-CN"

            [test-gui]
            name = "TestGui"
        "#;

        let config: RunnerConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.language, "zh-CN");
    }

    #[test]
    fn test_missing_test_gui_table_is_rejected() {
        let toml_str = r#"
            language = "en"
        "#;

        let result: Result<RunnerConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let toml_str = r#"
            [test-gui]
        "#;

        let result: Result<RunnerConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_keeps_hyphenated_table_name() {
        let toml_str = r#"
            [test-gui]
            name = "TestGui"
        "#;
        let config: RunnerConfig = toml::from_str(toml_str).unwrap();

        let rendered = toml::to_string(&config).unwrap();

        assert!(rendered.contains("[test-gui]"));
        assert!(rendered.contains("name = \"TestGui\""));
    }
}

#[cfg(test)]
mod load_runner_config_tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build_test_gui.toml");
        fs::write(&path, "[test-gui]\nname = \"TestGui\"\n").unwrap();

        let config = load_runner_config(&path).unwrap();

        assert_eq!(config.test_gui.name, "TestGui");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_missing_file_maps_to_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_config.toml");

        let err = load_runner_config(&path).unwrap_err();

        assert!(matches!(err, RunnerError::Config { .. }));
        assert_eq!(err.exit_code(), EXIT_CONFIG);
        assert!(err.to_string().contains("failed to load config"));
        assert!(err.to_string().contains("no_such_config.toml"));
    }

    #[test]
    fn test_malformed_file_maps_to_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build_test_gui.toml");
        // Invalid TOML - missing closing bracket
        fs::write(&path, "[test-gui\nname = \"TestGui\"\n").unwrap();

        let err = load_runner_config(&path).unwrap_err();

        assert!(matches!(err, RunnerError::Config { .. }));
        assert_eq!(err.exit_code(), EXIT_CONFIG);
    }
}
