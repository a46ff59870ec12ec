//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for the exit-code mapping of `RunnerError` and the accessors of
//! `RunOutcome`.
//!
//! 测试 `RunnerError` 的退出码映射以及 `RunOutcome` 的访问器。

use std::path::PathBuf;

use gui_test_runner::models::{
    RunOutcome, RunnerError, EXIT_CONFIG, EXIT_MISSING_EXECUTABLE,
};

#[cfg(test)]
mod runner_error_tests {
    use super::*;

    #[test]
    fn test_config_error_exit_code() {
        let err = RunnerError::Config {
            path: PathBuf::from("tools/build_test_gui.toml"),
            reason: "No such file or directory".to_string(),
        };

        assert_eq!(err.exit_code(), EXIT_CONFIG);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_executable_exit_code() {
        let err = RunnerError::MissingExecutable {
            path: PathBuf::from("test-exe/gui/TestGui"),
        };

        assert_eq!(err.exit_code(), EXIT_MISSING_EXECUTABLE);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let config_err = RunnerError::Config {
            path: PathBuf::from("tools/build_test_gui.toml"),
            reason: "boom".to_string(),
        };
        let exe_err = RunnerError::MissingExecutable {
            path: PathBuf::from("test-exe/gui/TestGui"),
        };

        assert!(config_err.to_string().contains("tools/build_test_gui.toml"));
        assert!(config_err.to_string().contains("boom"));
        assert!(exe_err.to_string().contains("test-exe/gui/TestGui"));
    }

    #[test]
    fn test_downcast_through_anyhow_keeps_exit_code() {
        // The orchestration bubbles RunnerError through anyhow; main
        // recovers the specific exit code by downcasting.
        let err: anyhow::Error = RunnerError::MissingExecutable {
            path: PathBuf::from("test-exe/gui/TestGui"),
        }
        .into();

        let code = err
            .downcast_ref::<RunnerError>()
            .map(RunnerError::exit_code)
            .unwrap_or(1);

        assert_eq!(code, 3);
    }
}

#[cfg(test)]
mod run_outcome_tests {
    use super::*;

    #[test]
    fn test_skipped_platform_outcome() {
        let outcome = RunOutcome::SkippedPlatform {
            platform: "linux".to_string(),
        };

        assert!(outcome.is_skipped());
        assert!(outcome.report().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_completed_outcome_exposes_report() {
        use gui_test_runner::models::RunReport;
        use gui_test_runner::version::AppVersion;
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        let outcome = RunOutcome::Completed(RunReport {
            executable: PathBuf::from("test-exe/gui/TestGui"),
            log_path: PathBuf::from("test-exe/gui/TestGui-2_05_build123.log"),
            version: AppVersion {
                major: 2,
                minor: 5,
                build: 123,
                beta: false,
            },
            status: ExitStatus::from_raw(0),
        });

        assert!(!outcome.is_skipped());
        let report = outcome.report().unwrap();
        assert!(report.status.success());
        assert_eq!(report.version.to_string(), "2_05_build123");
    }
}
