//! Leaf-name splitting and directory keys.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{is_separator, Component, Path, PathBuf, MAIN_SEPARATOR};

/// Split a path into its parent directory and its leaf name.
///
/// The parent is empty for a bare name. The leaf is `None` when the path ends
/// in a separator or in something that is not a name (`.`, `..`, a Windows
/// prefix); such entries are never renamed, only descended into.
///
/// # Examples
///
/// ```
/// use unorm::path::split_leaf;
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// let (parent, leaf) = split_leaf(Path::new("a/b/c.txt"));
/// assert_eq!(parent, Path::new("a/b"));
/// assert_eq!(leaf, Some(OsStr::new("c.txt")));
///
/// let (parent, leaf) = split_leaf(Path::new("c.txt"));
/// assert_eq!(parent, Path::new(""));
/// assert_eq!(leaf, Some(OsStr::new("c.txt")));
///
/// assert_eq!(split_leaf(Path::new("..")).1, None);
/// assert_eq!(split_leaf(Path::new("a/b/")).1, None);
/// ```
#[must_use]
pub fn split_leaf(path: &Path) -> (&Path, Option<&OsStr>) {
    let trailing_separator = path
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| is_separator(char::from(b)));
    if trailing_separator {
        return (path, None);
    }

    match path.file_name() {
        Some(leaf) => (path.parent().unwrap_or(Path::new("")), Some(leaf)),
        None => (path, None),
    }
}

/// Canonical key for a directory path: its components re-joined, followed by
/// exactly one separator.
///
/// Returns `None` for the empty path, which never names a directory.
///
/// # Examples
///
/// ```
/// use unorm::path::dir_key;
/// use std::path::Path;
///
/// assert_eq!(dir_key(Path::new("a/b")), dir_key(Path::new("a//b/")));
/// assert_eq!(dir_key(Path::new("a/./b")), dir_key(Path::new("a/b")));
/// assert_eq!(dir_key(Path::new("")), None);
/// ```
#[must_use]
pub fn dir_key(path: &Path) -> Option<OsString> {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let mut key = if cleaned.as_os_str().is_empty() {
        // "." and "./" reduce to nothing; keep them addressable
        if path.as_os_str().is_empty() {
            return None;
        }
        OsString::from(".")
    } else {
        cleaned.into_os_string()
    };

    let ends_with_separator = key
        .to_str()
        .is_some_and(|s| s.ends_with(['/', MAIN_SEPARATOR]));
    if !ends_with_separator {
        key.push(MAIN_SEPARATOR.to_string());
    }
    Some(key)
}

/// Returns true if both paths resolve to the same filesystem object.
///
/// Used before a rename to tell "the target name is another spelling of this
/// very entry" (normalization-insensitive file systems) from "the target name
/// belongs to a different entry".
#[must_use]
pub fn same_entry(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
            (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(ca), Ok(cb)) => ca == cb,
            _ => false,
        }
    }
}
