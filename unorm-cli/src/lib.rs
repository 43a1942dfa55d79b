//! Library exports for unorm-cli.
//!
//! This module exports the CLI structure so it can be inspected from tests
//! and reused for generated documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
