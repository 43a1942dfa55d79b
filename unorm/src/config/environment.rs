//! Environment variable handling for configuration defaults.
//!
//! Recognized variables:
//! - `UNORM_FORM`: normalization form used when none is given explicitly
//! - `UNORM_LOG_MODE`: log level, read by [`init_logger`](crate::init_logger)

use std::env;

use crate::error::Result;
use crate::NormalizationForm;

/// Name of the variable holding the default normalization form.
pub const FORM_VAR: &str = "UNORM_FORM";

/// Reads `UNORM_*` environment variables.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// The form named by `UNORM_FORM`, if set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds an unrecognized form name.
    pub fn form() -> Result<Option<NormalizationForm>> {
        match env::var(FORM_VAR) {
            Ok(value) if !value.trim().is_empty() => NormalizationForm::parse(&value).map(Some),
            _ => Ok(None),
        }
    }
}
