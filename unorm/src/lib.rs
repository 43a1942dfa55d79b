#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # unorm
//!
//! A library for renaming files and directories into a canonical Unicode
//! normalization form.
//!
//! The same visible name can be spelled with precomposed characters (NFC,
//! the usual Windows and Linux spelling) or with base letters plus combining
//! marks (NFD, what macOS hands out). Files moved between systems end up
//! with names that look identical but compare unequal. This library walks a
//! set of paths, normalizes each leaf name, and renames the entries whose
//! names change.
//!
//! ## Core Types
//!
//! - [`NormalizationForm`]: NFC, NFD, NFKC or NFKD
//! - [`NormalizerConfig`] and [`ConfigBuilder`]: run settings
//! - [`PathNormalizer`]: the recursive rename traversal
//! - [`RenameProjection`]: original-to-new directory bookkeeping
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use unorm::{ConfigBuilder, NormalizationForm, PathNormalizer};
//! use unorm::output::RenameEvent;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let album = dir.path().join("Bjo\u{308}rk");
//! std::fs::create_dir(&album).unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .with_form(NormalizationForm::Nfc)
//!     .recursive(true)
//!     .dry_run(true)
//!     .build()
//!     .unwrap();
//!
//! let mut normalizer = PathNormalizer::new(config, Vec::<RenameEvent>::new());
//! normalizer.process(&album).unwrap();
//!
//! assert_eq!(normalizer.rename_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, NormalizerConfig};
pub use error::{Error, Result};
pub use form::NormalizationForm;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{PathNormalizer, RunSummary};
pub use output::{OutputMode, RenameEvent, RenameReporter, WriterReporter};
pub use path::RenameProjection;
