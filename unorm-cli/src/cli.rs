//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The tool has a single action, so the normalize arguments are flattened
//! into the top-level parser instead of living under a subcommand.

use crate::commands::NormalizeCommand;
use clap::Parser;

const LONG_ABOUT: &str = "\
Rename files in Unicode normalized form.

Some Unicode characters can be represented by different combinations of code \
points. The e-acute character 'é' can be written either in a composed form, \
U+00E9, or a decomposed form, 'e' followed by U+0301. The forms are \
equivalent, but file systems compare names byte by byte: macOS typically \
hands out decomposed (NFD) names while Windows uses composed (NFC) ones, so \
the same name can look identical on screen and still differ.

unorm renames files and directories so that their names use one form.";

const AFTER_HELP: &str = "\
Examples:
  Change filenames in the current directory to Windows-friendly form:
    $ unorm --form=win *

  Change filenames to macOS-friendly form, including subdirectories:
    $ unorm --form=mac -r *

  Print possible filenames for NFKD form without renaming anything:
    $ unorm --form=NFKD -r --dry-run --both *

Note: NFKC and NFKD may cause irreversible changes. Be careful using them.";

/// Command-line tool for renaming files into a Unicode normalization form.
#[derive(Parser)]
#[command(name = "unorm")]
#[command(
    version,
    about = "Rename files in Unicode normalized form",
    long_about = LONG_ABOUT,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet; do not print filenames
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub normalize: NormalizeCommand,
}
