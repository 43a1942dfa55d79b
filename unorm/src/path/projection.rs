//! Original-to-renamed directory bookkeeping.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::leaf::dir_key;

/// Maps original directory paths to the paths they have (or would have)
/// after renaming.
///
/// The map only grows during a run. A lookup miss means no rename affected
/// that directory and the original path is still correct.
///
/// # Examples
///
/// ```
/// use unorm::path::RenameProjection;
/// use std::path::Path;
///
/// let mut projection = RenameProjection::new();
/// assert!(projection.record(Path::new("old"), Path::new("new")));
///
/// assert_eq!(projection.resolve(Path::new("old/")), Path::new("new"));
/// assert_eq!(projection.resolve(Path::new("other")), Path::new("other"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct RenameProjection {
    entries: HashMap<OsString, PathBuf>,
}

impl RenameProjection {
    /// Creates an empty projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember that the directory at `original` now lives (or would live) at
    /// `projected`.
    ///
    /// Identity mappings are not stored since a miss already resolves to the
    /// original path. Returns true if an entry was stored.
    pub fn record(&mut self, original: &Path, projected: &Path) -> bool {
        let (Some(from), Some(to)) = (dir_key(original), dir_key(projected)) else {
            return false;
        };
        if from == to {
            return false;
        }
        log::debug!(
            "projecting {} -> {}",
            original.display(),
            projected.display()
        );
        self.entries.insert(from, projected.to_path_buf());
        true
    }

    /// Look up the projected location of `dir`.
    #[must_use]
    pub fn get(&self, dir: &Path) -> Option<&Path> {
        dir_key(dir)
            .and_then(|key| self.entries.get(&key))
            .map(PathBuf::as_path)
    }

    /// The projected location of `dir`, or `dir` itself when nothing was
    /// recorded for it.
    #[must_use]
    pub fn resolve<'a>(&'a self, dir: &'a Path) -> &'a Path {
        self.get(dir).unwrap_or(dir)
    }

    /// Number of recorded directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
