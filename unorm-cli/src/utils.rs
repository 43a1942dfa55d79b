//! Utility types for CLI operations.

/// Global CLI options shared across commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress per-file output and warnings.
    pub quiet: bool,
}
