//! CLI command implementations.
//!
//! - `normalize`: rename files and directories into a normalization form

pub mod normalize;

pub use normalize::{NormalizeCommand, RenameOutputFormat};
