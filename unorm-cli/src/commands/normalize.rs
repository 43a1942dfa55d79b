//! The rename command.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use unorm::{ConfigBuilder, NormalizerConfig, OutputMode, PathNormalizer};

/// Rename files and directories into a Unicode normalization form.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Files, directories or glob patterns to rename
    #[arg(value_name = "FILE")]
    pub patterns: Vec<String>,

    /// Unicode normalization form: NFC, NFD, NFKC, NFKD, or WIN, MAC
    /// [default: WIN on Windows, MAC on macOS, NFC elsewhere]
    #[arg(short, long, value_name = "FORM", env = "UNORM_FORM")]
    pub form: Option<String>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Do not rename anything; print what would change
    #[arg(short, long, visible_alias = "dryrun")]
    pub dry_run: bool,

    /// Print both the original and the changed filename
    #[arg(short, long)]
    pub both: bool,

    /// Output format for renamed entries
    #[arg(long, value_enum)]
    pub format: Option<RenameOutputFormat>,
}

/// Output format accepted by `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenameOutputFormat {
    /// New path only
    Plain,
    /// Original path and new path
    Both,
    /// One JSON object per line
    Json,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = self.build_config(global)?;

        if config.form.is_compatibility() {
            log::warn!(
                "{} may change names irreversibly (e.g. ligatures and superscripts are folded)",
                config.form
            );
        }
        if config.dry_run {
            log::info!("dry run: nothing will be renamed");
        }

        let mut normalizer = PathNormalizer::new(config, config.output.stdout_reporter());
        let summary = normalizer.run(&self.patterns)?;

        log::info!("{summary}");
        Ok(())
    }

    /// Resolve flags into a normalizer configuration.
    pub fn build_config(&self, global: &GlobalOptions) -> Result<NormalizerConfig, CliError> {
        let mut builder = ConfigBuilder::new()
            .recursive(self.recursive)
            .dry_run(self.dry_run)
            .output(self.output_mode(global));

        if let Some(ref form) = self.form {
            builder = builder.with_form_name(form.clone());
        }

        builder.build().map_err(CliError::from)
    }

    fn output_mode(&self, global: &GlobalOptions) -> OutputMode {
        if global.quiet {
            return OutputMode::Quiet;
        }
        match self.format {
            Some(RenameOutputFormat::Json) => OutputMode::Json,
            Some(RenameOutputFormat::Both) => OutputMode::Both,
            Some(RenameOutputFormat::Plain) | None => OutputMode::from_flags(false, self.both),
        }
    }
}
