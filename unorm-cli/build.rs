//! Build script for unorm-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/normalize.rs.
fn build_cli() -> Command {
    Command::new("unorm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rename files in Unicode normalized form")
        .long_about(
            "Rename files and directories so that their names use one Unicode \
             normalization form (NFC, NFD, NFKC or NFKD)",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet; do not print filenames")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("form")
                .short('f')
                .long("form")
                .value_name("FORM")
                .help("Unicode normalization form: NFC, NFD, NFKC, NFKD, or WIN, MAC")
                .env("UNORM_FORM"),
        )
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .help("Recurse into subdirectories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('d')
                .long("dry-run")
                .visible_alias("dryrun")
                .help("Do not rename anything; print what would change")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("both")
                .short('b')
                .long("both")
                .help("Print both the original and the changed filename")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .value_parser(["plain", "both", "json"])
                .help("Output format for renamed entries"),
        )
        .arg(
            Arg::new("FILE")
                .help("Files, directories or glob patterns to rename")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("unorm.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
