//! Expansion of command-line patterns into concrete paths.
//!
//! Each argument is treated as a glob pattern, the way a shell would expand
//! it. This matters on hosts whose shell passes wildcards through untouched.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};

const GLOB_META: &[char] = &['*', '?', '['];

/// Expand a leading tilde (`~`) in a pattern to the home directory.
///
/// Handles `~` and `~/rest`; `~user` is not supported. The home directory is
/// escaped so that it is matched literally when the result is globbed.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined, if it is not
/// valid UTF-8, or if the pattern uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use unorm::path::expand_tilde;
///
/// // Leaves other patterns unchanged
/// assert_eq!(expand_tilde("docs/*.txt").unwrap(), "docs/*.txt");
///
/// // Expands ~/ to the home directory
/// let expanded = expand_tilde("~/notes").unwrap();
/// assert!(expanded.ends_with("notes"));
/// assert!(!expanded.starts_with('~'));
/// ```
pub fn expand_tilde(pattern: &str) -> Result<String> {
    if !pattern.starts_with('~') {
        return Ok(pattern.to_string());
    }

    let rest = if pattern == "~" {
        ""
    } else if let Some(rest) = pattern
        .strip_prefix("~/")
        .or_else(|| pattern.strip_prefix("~\\"))
    {
        rest
    } else {
        return Err(Error::InvalidPath {
            path: PathBuf::from(pattern),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from(pattern),
        reason: "Cannot determine home directory".to_string(),
    })?;
    let home = home.to_str().ok_or_else(|| Error::InvalidPath {
        path: home.clone(),
        reason: "Home directory contains invalid UTF-8".to_string(),
    })?;

    let home = Pattern::escape(home);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(Path::new(&home).join(rest).to_string_lossy().into_owned())
    }
}

/// Expand a pattern into the paths it names.
///
/// - An existing entry whose name happens to contain glob metacharacters is
///   returned as-is.
/// - A pattern without metacharacters names at most one entry: itself if it
///   exists (a dangling symlink counts), nothing otherwise.
/// - Anything else is matched against the filesystem; matches come back in
///   sorted order and may be empty. Entries that cannot be read while
///   matching are skipped.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the pattern is malformed.
///
/// # Examples
///
/// ```
/// use unorm::path::expand_pattern;
///
/// assert!(expand_pattern("does-not-exist.txt").unwrap().is_empty());
///
/// assert!(expand_pattern("no-such-dir-*/x").unwrap().is_empty());
/// assert!(expand_pattern("[").is_err());
/// ```
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let literal = Path::new(pattern);
    if literal.symlink_metadata().is_ok() {
        return Ok(vec![literal.to_path_buf()]);
    }

    let expanded = expand_tilde(pattern)?;
    if !expanded.contains(GLOB_META) {
        let path = PathBuf::from(expanded);
        return Ok(if path.symlink_metadata().is_ok() {
            vec![path]
        } else {
            Vec::new()
        });
    }

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let paths = glob::glob_with(&expanded, options).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => log::debug!("skipping unreadable match for '{pattern}': {e}"),
        }
    }
    Ok(matches)
}
