//! Path handling for the normalizer.
//!
//! # Key Concepts
//!
//! ## Leaf names
//!
//! Only the final segment of a path is ever normalized. [`split_leaf`] breaks
//! a path into its parent directory and that segment; paths such as `/`, `.`
//! or `..` have no renamable leaf.
//!
//! ## Projection
//!
//! When a directory is renamed, every path computed for its descendants must
//! be built on the directory's new name. [`RenameProjection`] remembers
//! original-to-new directory paths, keyed in a canonical trailing-separator
//! form so that `a/b`, `a/b/` and `a//b` all hit the same entry.
//!
//! ## Pattern expansion
//!
//! Command-line arguments are glob patterns. [`expand_pattern`] expands a
//! leading `~` and then matches the pattern against the filesystem.
//!
//! # Examples
//!
//! ```
//! use unorm::path::{split_leaf, RenameProjection};
//! use std::path::Path;
//!
//! let mut projection = RenameProjection::new();
//! projection.record(Path::new("music/Cafe\u{301}"), Path::new("music/Caf\u{e9}"));
//!
//! let (parent, leaf) = split_leaf(Path::new("music/Cafe\u{301}/track.mp3"));
//! assert_eq!(leaf.unwrap(), "track.mp3");
//! assert_eq!(projection.resolve(parent), Path::new("music/Caf\u{e9}"));
//! ```

pub mod expand;
pub mod leaf;
pub mod projection;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use expand::{expand_pattern, expand_tilde};
pub use leaf::{dir_key, same_entry, split_leaf};
pub use projection::RenameProjection;
