//! Error types for the unorm library.
//!
//! Every failure during a run is terminal: the first error raised anywhere in
//! the traversal aborts the invocation and entries renamed before it stay
//! renamed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a unorm error.
///
/// # Examples
///
/// ```
/// use unorm::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the unorm library.
#[derive(Debug, Error)]
pub enum Error {
    /// An unrecognized normalization form name was supplied.
    #[error("invalid normalization form '{value}': expected one of NFC, NFD, NFKC, NFKD, WIN, MAC")]
    InvalidForm {
        /// The rejected form name.
        value: String,
    },

    /// A path could not be stat'ed (missing, dangling symlink, or inaccessible).
    #[error("cannot access {}: {source}", path.display())]
    NotFound {
        /// The path that could not be resolved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory could not be enumerated.
    #[error("cannot list directory {}: {source}", path.display())]
    List {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An entry could not be renamed to its normalized name.
    #[error("cannot rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        /// The current path of the entry.
        from: PathBuf,
        /// The normalized target path.
        to: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A filename pattern could not be parsed.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The parse error reported by the glob matcher.
        #[source]
        source: glob::PatternError,
    },

    /// A path argument could not be interpreted.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Writing rename output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist or cannot be accessed.
    ///
    /// # Examples
    ///
    /// ```
    /// use unorm::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound {
    ///     path: PathBuf::from("/nonexistent"),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error stems from invalid user configuration rather than the
    /// filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use unorm::Error;
    ///
    /// let err = Error::InvalidForm { value: "NFX".to_string() };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidForm { .. } | Self::InvalidPattern { .. } | Self::InvalidPath { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_form_error() {
        let err = Error::InvalidForm {
            value: "nfx".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid normalization form"));
        assert!(display.contains("nfx"));
        assert!(display.contains("NFKD"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            path: PathBuf::from("/missing/file"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/file"));
        assert!(err.is_not_found());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_rename_error() {
        let err = Error::Rename {
            from: PathBuf::from("old"),
            to: PathBuf::from("new"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot rename"));
        assert!(display.contains("old"));
        assert!(display.contains("new"));
    }

    #[test]
    fn test_list_error_has_source() {
        use std::error::Error as _;

        let err = Error::List {
            path: PathBuf::from("dir"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.source().is_some());
        assert!(format!("{err}").contains("cannot list directory"));
    }

    #[test]
    fn test_invalid_pattern_is_configuration() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = Error::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(err.is_configuration());
        assert!(format!("{err}").contains("invalid pattern"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::InvalidForm {
                value: "x".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
