//! Unicode normalization forms.
//!
//! The same accented character can be spelled with a precomposed code point
//! (`é` as U+00E9) or a base letter plus combining mark (`e` + U+0301). macOS
//! file systems tend to hand out the decomposed spelling while Windows uses
//! the composed one, so a name copied between the two can look identical yet
//! compare unequal. A [`NormalizationForm`] picks one spelling.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use unicode_normalization::{is_nfc, is_nfd, is_nfkc, is_nfkd, UnicodeNormalization};

use crate::error::{Error, Result};

/// One of the four standard Unicode normalization forms.
///
/// # Examples
///
/// ```
/// use unorm::NormalizationForm;
///
/// let form: NormalizationForm = "mac".parse().unwrap();
/// assert_eq!(form, NormalizationForm::Nfd);
/// assert_eq!(form.normalize("\u{e9}"), "e\u{301}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationForm {
    /// Canonical decomposition followed by canonical composition.
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl NormalizationForm {
    /// All forms, in the order they are usually listed.
    pub const ALL: [Self; 4] = [Self::Nfc, Self::Nfd, Self::Nfkc, Self::Nfkd];

    /// Parses a form name.
    ///
    /// Accepts `NFC`, `NFD`, `NFKC`, `NFKD`, plus `WIN` (NFC) and `MAC` (NFD),
    /// in any case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidForm`] for any other value.
    ///
    /// # Examples
    ///
    /// ```
    /// use unorm::NormalizationForm;
    ///
    /// assert_eq!(NormalizationForm::parse("Win").unwrap(), NormalizationForm::Nfc);
    /// assert_eq!(NormalizationForm::parse("nfkd").unwrap(), NormalizationForm::Nfkd);
    /// assert!(NormalizationForm::parse("utf8").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NFC" | "WIN" => Ok(Self::Nfc),
            "NFD" | "MAC" => Ok(Self::Nfd),
            "NFKC" => Ok(Self::Nfkc),
            "NFKD" => Ok(Self::Nfkd),
            _ => Err(Error::InvalidForm {
                value: s.to_string(),
            }),
        }
    }

    /// The form matching the conventions of the host operating system.
    ///
    /// Apple platforms store decomposed names; everything else defaults to
    /// the composed form.
    #[must_use]
    pub const fn host_default() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Nfd
        } else {
            Self::Nfc
        }
    }

    /// Returns `s` converted to this form.
    #[must_use]
    pub fn normalize(self, s: &str) -> String {
        match self {
            Self::Nfc => s.nfc().collect(),
            Self::Nfd => s.nfd().collect(),
            Self::Nfkc => s.nfkc().collect(),
            Self::Nfkd => s.nfkd().collect(),
        }
    }

    /// Returns true if `s` is already in this form.
    #[must_use]
    pub fn is_normalized(self, s: &str) -> bool {
        match self {
            Self::Nfc => is_nfc(s),
            Self::Nfd => is_nfd(s),
            Self::Nfkc => is_nfkc(s),
            Self::Nfkd => is_nfkd(s),
        }
    }

    /// Compatibility forms fold distinct characters together (`ﬁ` becomes
    /// `fi`, `²` becomes `2`), so renames made with them cannot be undone by
    /// switching forms.
    #[must_use]
    pub const fn is_compatibility(self) -> bool {
        matches!(self, Self::Nfkc | Self::Nfkd)
    }

    /// Canonical upper-case name of the form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }
}

impl Default for NormalizationForm {
    fn default() -> Self {
        Self::host_default()
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
