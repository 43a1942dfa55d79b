//! Recursive rename traversal.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

use crate::config::NormalizerConfig;
use crate::error::{Error, Result};
use crate::output::{RenameEvent, RenameReporter};
use crate::path::{expand_pattern, same_entry, split_leaf, RenameProjection};

use super::RunSummary;

/// Walks paths and renames entries whose leaf names change under the
/// configured normalization form.
///
/// All traversal state (rename counter and directory projection) lives in
/// the normalizer, so one value should be used for one whole invocation:
/// the projection is shared across root arguments.
///
/// # Examples
///
/// ```
/// use unorm::config::ConfigBuilder;
/// use unorm::operations::PathNormalizer;
/// use unorm::output::RenameEvent;
/// use unorm::NormalizationForm;
///
/// let dir = tempfile::tempdir().unwrap();
/// let original = dir.path().join("Cafe\u{301}.txt");
/// std::fs::write(&original, b"").unwrap();
///
/// let config = ConfigBuilder::new()
///     .with_form(NormalizationForm::Nfc)
///     .dry_run(true)
///     .build()
///     .unwrap();
/// let mut events: Vec<RenameEvent> = Vec::new();
/// let mut normalizer = PathNormalizer::new(config, &mut events);
/// normalizer.process(&original).unwrap();
///
/// assert_eq!(normalizer.rename_count(), 1);
/// assert!(original.exists());
/// assert_eq!(events[0].renamed, dir.path().join("Caf\u{e9}.txt"));
/// ```
pub struct PathNormalizer<R: RenameReporter> {
    config: NormalizerConfig,
    reporter: R,
    projection: RenameProjection,
    renamed: usize,
    visited: usize,
}

impl<R: RenameReporter> PathNormalizer<R> {
    /// Creates a normalizer that reports renames to `reporter`.
    pub fn new(config: NormalizerConfig, reporter: R) -> Self {
        Self {
            config,
            reporter,
            projection: RenameProjection::new(),
            renamed: 0,
            visited: 0,
        }
    }

    /// Expand every pattern and process each match, in order.
    ///
    /// Patterns matching nothing are skipped. Overlapping patterns are not
    /// deduplicated: an entry named twice is processed twice.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from pattern expansion or from
    /// [`process`](Self::process).
    pub fn run<I, S>(&mut self, patterns: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let paths = expand_pattern(pattern)?;
            if paths.is_empty() {
                log::info!("no entries match '{pattern}'");
                continue;
            }
            for path in paths {
                self.process(&path)?;
            }
        }
        Ok(self.summary())
    }

    /// Normalize the leaf name of `path` and, for directories with recursion
    /// enabled, everything below it.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if `path` (or a descendant) cannot be stat'ed
    /// - [`Error::Rename`] if a rename fails or its target is another entry
    /// - [`Error::List`] if a directory cannot be read
    /// - [`Error::Io`] if the reporter fails to write
    ///
    /// The first error aborts the traversal. Renames already made are kept.
    pub fn process(&mut self, path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|source| Error::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        self.visited += 1;
        let is_dir = metadata.is_dir();
        log::debug!("visiting {}", path.display());

        let (parent, leaf) = split_leaf(path);
        let Some(leaf) = leaf else {
            // `/`, `.` and the like: nothing to rename, but still descend
            return self.descend(path, path, path, is_dir);
        };

        let projected_parent = self.projection.resolve(parent).to_path_buf();
        let (projected, actual) = match self.normalized_leaf(leaf) {
            None => (projected_parent.join(leaf), path.to_path_buf()),
            Some(normalized) => {
                self.renamed += 1;
                let new_path = projected_parent.join(normalized);

                self.reporter.report(&RenameEvent {
                    original: path.to_path_buf(),
                    renamed: new_path.clone(),
                    is_dir,
                    dry_run: self.config.dry_run,
                })?;

                if self.config.dry_run {
                    (new_path, path.to_path_buf())
                } else {
                    rename_entry(path, &new_path)?;
                    (new_path.clone(), new_path)
                }
            }
        };

        self.descend(path, &projected, &actual, is_dir)
    }

    /// Record where a directory ended up and, if recursion is on, process
    /// its children from the directory's current on-disk location.
    fn descend(
        &mut self,
        original: &Path,
        projected: &Path,
        actual: &Path,
        is_dir: bool,
    ) -> Result<()> {
        if !is_dir {
            return Ok(());
        }

        self.projection.record(original, projected);
        if !self.config.recursive {
            return Ok(());
        }

        for child in list_children(actual)? {
            self.process(&actual.join(child))?;
        }
        Ok(())
    }

    /// The normalized leaf, or `None` when it is already in the target form.
    fn normalized_leaf(&self, leaf: &OsStr) -> Option<String> {
        let Some(name) = leaf.to_str() else {
            log::debug!("leaving non-UTF-8 name {} unchanged", leaf.to_string_lossy());
            return None;
        };
        if self.config.form.is_normalized(name) {
            return None;
        }
        let normalized = self.config.form.normalize(name);
        (normalized != name).then_some(normalized)
    }

    /// Counters for the work done so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            form: self.config.form,
            dry_run: self.config.dry_run,
            visited: self.visited,
            renamed: self.renamed,
        }
    }

    /// Number of entries renamed (or that would be renamed in a dry run).
    #[must_use]
    pub fn rename_count(&self) -> usize {
        self.renamed
    }

    /// The directory projection built so far.
    #[must_use]
    pub fn projection(&self) -> &RenameProjection {
        &self.projection
    }

    /// The configuration this normalizer runs with.
    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Consume the normalizer and return its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}

/// Names of the entries in `dir`, sorted.
fn list_children(dir: &Path) -> Result<Vec<OsString>> {
    let list_error = |source| Error::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = fs::read_dir(dir)
        .map_err(list_error)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(list_error)?;
    names.sort();
    Ok(names)
}

/// Rename `from` to `to`, refusing to replace a different existing entry.
///
/// On file systems that ignore normalization differences the target name
/// already resolves to `from` itself; that case is allowed through.
fn rename_entry(from: &Path, to: &Path) -> Result<()> {
    let rename_error = |source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if to.symlink_metadata().is_ok() && !same_entry(from, to) {
        return Err(rename_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "target already exists",
        )));
    }

    log::debug!("renaming {} -> {}", from.display(), to.display());
    fs::rename(from, to).map_err(rename_error)
}
