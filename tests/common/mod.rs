// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

pub fn setup_sandbox() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a minimal runner configuration naming `name` as the test
/// executable and returns its path.
pub fn write_config(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join("build_test_gui.toml");
    let content = format!(
        r#"language = "en"

[test-gui]
name = "{name}"
"#
    );
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// Writes a version header defining 2.05 build 123, optionally marked as
/// a beta build, and returns its path.
pub fn write_header(dir: &Path, beta: bool) -> PathBuf {
    let path = dir.join("windscribe_version.h");
    let mut content = String::from(
        "#pragma once\n\
         #define WINDSCRIBE_MAJOR_VERSION 2\n\
         #define WINDSCRIBE_MINOR_VERSION 5\n\
         #define WINDSCRIBE_BUILD_VERSION 123\n",
    );
    if beta {
        content.push_str("#define WINDSCRIBE_IS_BETA\n");
    }
    fs::write(&path, content).expect("Failed to write header");
    path
}

/// Places an executable shell script at `<artifact_dir>/gui/<name>` so a
/// run against a non-windows platform can spawn it.
#[cfg(unix)]
pub fn write_executable(artifact_dir: &Path, name: &str, script_body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let gui_dir = artifact_dir.join("gui");
    fs::create_dir_all(&gui_dir).expect("Failed to create gui dir");

    let path = gui_dir.join(name);
    let script = format!("#!/bin/sh\n{script_body}\n");
    fs::write(&path, script).expect("Failed to write fake executable");

    let mut perms = fs::metadata(&path)
        .expect("Failed to stat fake executable")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to mark fake executable as executable");

    path
}
