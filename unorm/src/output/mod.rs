//! Output of rename events.
//!
//! Every rename, real or simulated, produces a [`RenameEvent`]. The
//! normalizer hands events to a [`RenameReporter`]; the stock reporter,
//! [`WriterReporter`], formats them according to an [`OutputMode`] and writes
//! them to any `io::Write`.

mod formatters;

use std::io::{self, Write};
use std::path::PathBuf;

use crate::Result;

pub use formatters::{BothFormatter, JsonFormatter, NewPathFormatter};

/// A single entry whose name changed under normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEvent {
    /// Path the entry was found at.
    pub original: PathBuf,
    /// Path the entry has (or would have) after the rename.
    pub renamed: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the rename was only simulated.
    pub dry_run: bool,
}

/// Trait for turning a rename event into output text.
pub trait RenameFormatter {
    /// Format one event. The returned text includes its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be represented (e.g. JSON
    /// serialization failure).
    fn format(&self, event: &RenameEvent) -> Result<String>;
}

/// Receives rename events as the normalizer produces them.
pub trait RenameReporter {
    /// Handle one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be formatted or written.
    fn report(&mut self, event: &RenameEvent) -> Result<()>;
}

/// How renamed entries are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Print nothing.
    Quiet,
    /// Print the new path of each renamed entry.
    #[default]
    NewPath,
    /// Print the original path followed by an indented `-> new path` line.
    Both,
    /// Print one JSON object per renamed entry.
    Json,
}

impl OutputMode {
    /// Pick a mode from the quiet and both toggles. Quiet wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use unorm::output::OutputMode;
    ///
    /// assert_eq!(OutputMode::from_flags(false, false), OutputMode::NewPath);
    /// assert_eq!(OutputMode::from_flags(false, true), OutputMode::Both);
    /// assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
    /// ```
    #[must_use]
    pub const fn from_flags(quiet: bool, both: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if both {
            Self::Both
        } else {
            Self::NewPath
        }
    }

    /// Create a formatter for this mode, or `None` when output is suppressed.
    #[must_use]
    pub fn create_formatter(&self) -> Option<Box<dyn RenameFormatter>> {
        match self {
            Self::Quiet => None,
            Self::NewPath => Some(Box::new(NewPathFormatter)),
            Self::Both => Some(Box::new(BothFormatter)),
            Self::Json => Some(Box::new(JsonFormatter)),
        }
    }

    /// A reporter for this mode that writes to standard output.
    #[must_use]
    pub fn stdout_reporter(&self) -> WriterReporter<io::Stdout> {
        WriterReporter::new(*self, io::stdout())
    }
}

/// Reporter that formats events and writes them to `W`.
///
/// # Examples
///
/// ```
/// use unorm::output::{OutputMode, RenameEvent, RenameReporter, WriterReporter};
/// use std::path::PathBuf;
///
/// let mut reporter = WriterReporter::new(OutputMode::Both, Vec::new());
/// reporter
///     .report(&RenameEvent {
///         original: PathBuf::from("old"),
///         renamed: PathBuf::from("new"),
///         is_dir: false,
///         dry_run: true,
///     })
///     .unwrap();
///
/// assert_eq!(String::from_utf8(reporter.into_inner()).unwrap(), "old\n  -> new\n");
/// ```
pub struct WriterReporter<W: Write> {
    formatter: Option<Box<dyn RenameFormatter>>,
    writer: W,
}

impl<W: Write> WriterReporter<W> {
    /// Create a reporter writing events in `mode` to `writer`.
    #[must_use]
    pub fn new(mode: OutputMode, writer: W) -> Self {
        Self {
            formatter: mode.create_formatter(),
            writer,
        }
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenameReporter for WriterReporter<W> {
    fn report(&mut self, event: &RenameEvent) -> Result<()> {
        if let Some(formatter) = &self.formatter {
            let text = formatter.format(event)?;
            self.writer.write_all(text.as_bytes())?;
            self.writer.flush()?;
        }
        Ok(())
    }
}

impl<R: RenameReporter + ?Sized> RenameReporter for &mut R {
    fn report(&mut self, event: &RenameEvent) -> Result<()> {
        (**self).report(event)
    }
}

impl RenameReporter for Vec<RenameEvent> {
    fn report(&mut self, event: &RenameEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}
