//! Run configuration for the normalizer.
//!
//! # Configuration Precedence
//!
//! The normalization form is taken from the first of:
//!
//! 1. An explicit form set on the builder (`with_form` / `with_form_name`)
//! 2. The `UNORM_FORM` environment variable
//! 3. The host default ([`NormalizationForm::host_default`])
//!
//! All other settings default to off (no recursion, real renames, new-path
//! output).
//!
//! # Examples
//!
//! ```
//! use unorm::config::ConfigBuilder;
//! use unorm::output::OutputMode;
//! use unorm::NormalizationForm;
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_form_name("mac")
//!     .recursive(true)
//!     .dry_run(true)
//!     .output(OutputMode::Both)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.form, NormalizationForm::Nfd);
//! assert!(config.recursive);
//! assert!(config.dry_run);
//! ```

pub mod environment;

pub use environment::EnvironmentConfig;

use crate::error::Result;
use crate::output::OutputMode;
use crate::NormalizationForm;

/// Settings for one normalizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Target normalization form.
    pub form: NormalizationForm,
    /// Descend into directories.
    pub recursive: bool,
    /// Compute and report renames without touching the filesystem.
    pub dry_run: bool,
    /// How renamed entries are shown.
    pub output: OutputMode,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            form: NormalizationForm::host_default(),
            recursive: false,
            dry_run: false,
            output: OutputMode::default(),
        }
    }
}

#[derive(Debug, Clone)]
enum FormSource {
    Unset,
    Form(NormalizationForm),
    Name(String),
}

/// Builder for [`NormalizerConfig`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    form: FormSource,
    recursive: bool,
    dry_run: bool,
    output: OutputMode,
    skip_env: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Creates a builder with every setting at its default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormSource::Unset,
            recursive: false,
            dry_run: false,
            output: OutputMode::default(),
            skip_env: false,
        }
    }

    /// Use `form`.
    #[must_use]
    pub fn with_form(mut self, form: NormalizationForm) -> Self {
        self.form = FormSource::Form(form);
        self
    }

    /// Use the form named `name`. The name is validated by [`build`](Self::build).
    #[must_use]
    pub fn with_form_name(mut self, name: impl Into<String>) -> Self {
        self.form = FormSource::Name(name.into());
        self
    }

    /// Descend into directories.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Only simulate renames.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the output mode.
    #[must_use]
    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Ignore `UNORM_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidForm`](crate::Error::InvalidForm) if the
    /// explicit form name or `UNORM_FORM` is not a recognized form.
    pub fn build(self) -> Result<NormalizerConfig> {
        let form = match self.form {
            FormSource::Form(form) => form,
            FormSource::Name(name) => NormalizationForm::parse(&name)?,
            FormSource::Unset => {
                let from_env = if self.skip_env {
                    None
                } else {
                    EnvironmentConfig::form()?
                };
                from_env.unwrap_or_else(NormalizationForm::host_default)
            }
        };

        Ok(NormalizerConfig {
            form,
            recursive: self.recursive,
            dry_run: self.dry_run,
            output: self.output,
        })
    }
}
