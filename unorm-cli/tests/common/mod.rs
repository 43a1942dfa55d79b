//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - A test environment with a temporary directory
//! - Command builders with the environment isolated from the caller's
//! - Name fixtures in composed and decomposed spellings

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// "café.txt" with a combining acute accent.
#[allow(dead_code)]
pub const FILE_NFD: &str = "cafe\u{301}.txt";
/// "café.txt" with a precomposed character.
#[allow(dead_code)]
pub const FILE_NFC: &str = "caf\u{e9}.txt";
/// "Résumé" with combining acute accents.
#[allow(dead_code)]
pub const DIR_NFD: &str = "Re\u{301}sume\u{301}";
/// "Résumé" with precomposed characters.
#[allow(dead_code)]
pub const DIR_NFC: &str = "R\u{e9}sum\u{e9}";

/// Test environment with an isolated scratch directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the unorm binary.
    ///
    /// `UNORM_*` variables from the caller's environment are removed so
    /// tests see the built-in defaults unless they set them explicitly.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("unorm").expect("Failed to find unorm binary");
        cmd.env_remove("UNORM_FORM").env_remove("UNORM_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path below the temp directory.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.temp_path.join(rel)
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parent directories) in the test environment.
    pub fn create_file(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, b"data").expect("Failed to create test file");
        path
    }

    /// Whether the file system keeps NFC and NFD spellings apart.
    pub fn preserves_distinct_spellings(&self) -> bool {
        let probe = self.create_file("probe-e\u{301}");
        let distinct = !self.join("probe-\u{e9}").exists();
        fs::remove_file(probe).expect("Failed to remove probe");
        distinct
    }

    /// Run unorm with `args` and return stdout, asserting success.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run unorm");

        assert!(
            output.status.success(),
            "unorm failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a path the way the binary prints it.
#[allow(dead_code)]
pub fn shown(path: &Path) -> String {
    path.to_str().expect("Non UTF-8 test path").to_string()
}
