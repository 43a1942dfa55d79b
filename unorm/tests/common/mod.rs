//! Common test utilities for normalizer integration tests.
//!
//! Provides a scratch directory tree with helpers for creating entries with
//! composed or decomposed names and for running a normalizer over it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unorm::{ConfigBuilder, NormalizationForm, OutputMode, PathNormalizer, WriterReporter};

/// "Résumé" with combining acute accents.
pub const DIR_NFD: &str = "Re\u{301}sume\u{301}";
/// "Résumé" with precomposed characters.
pub const DIR_NFC: &str = "R\u{e9}sum\u{e9}";
/// "café.txt" with a combining acute accent.
pub const FILE_NFD: &str = "cafe\u{301}.txt";
/// "café.txt" with a precomposed character.
pub const FILE_NFC: &str = "caf\u{e9}.txt";

/// Scratch directory removed when dropped.
pub struct TestTree {
    temp_dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.path().join(rel)
    }

    /// Create a directory (and its parents) under the tree.
    pub fn dir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file under the tree whose contents are its relative path.
    pub fn file(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.join(rel.as_ref());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, rel.as_ref().to_string_lossy().as_bytes())
            .expect("Failed to create test file");
        path
    }

    /// Whether the underlying file system keeps NFC and NFD spellings apart.
    pub fn preserves_distinct_spellings(&self) -> bool {
        let probe = self.file("probe-e\u{301}");
        let distinct = !self.join("probe-\u{e9}").exists();
        fs::remove_file(probe).expect("Failed to remove probe");
        distinct
    }

    /// Sorted relative paths of every entry below the root.
    pub fn listing(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        collect(self.path(), self.path(), &mut out);
        out.sort();
        out
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        out.push(path.strip_prefix(root).unwrap().to_path_buf());
        if path.is_dir() {
            collect(root, &path, out);
        }
    }
}

/// Run a normalizer over `roots`, given as command-line arguments, and
/// return what it printed.
pub fn run_capture(
    form: NormalizationForm,
    recursive: bool,
    dry_run: bool,
    mode: OutputMode,
    roots: &[PathBuf],
) -> (String, usize) {
    let config = ConfigBuilder::new()
        .with_form(form)
        .recursive(recursive)
        .dry_run(dry_run)
        .output(mode)
        .build()
        .expect("Failed to build config");

    let mut normalizer = PathNormalizer::new(config, WriterReporter::new(mode, Vec::new()));
    let patterns = roots
        .iter()
        .map(|root| root.to_str().expect("Non UTF-8 test path"));
    let renamed = normalizer.run(patterns).expect("Normalizer failed").renamed;
    let output = String::from_utf8(normalizer.into_reporter().into_inner())
        .expect("Invalid UTF-8 in output");
    (output, renamed)
}
