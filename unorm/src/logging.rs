//! Diagnostics for unorm runs.
//!
//! Renamed paths go to stdout through the [`output`](crate::output) module;
//! everything else (warnings about compatibility forms, per-entry debug
//! traces, the closing summary) is a diagnostic and goes to stderr through
//! the [`Logger`] defined here. Library code only talks to the `log` facade,
//! so the logger has to be [installed](Logger::install) for those messages to
//! appear.

use std::env;
use std::fmt;
use std::io::{self, Write};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Name of the variable selecting the log level when no CLI flag is given.
pub const LOG_MODE_VAR: &str = "UNORM_LOG_MODE";

/// How chatty a run is on stderr.
///
/// # Examples
///
/// ```
/// use unorm::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all, not even warnings.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including per-entry traces.
    Verbose,
}

impl LogLevel {
    const NAMES: [(&'static str, Self); 3] = [
        ("quiet", Self::Quiet),
        ("normal", Self::Normal),
        ("verbose", Self::Verbose),
    ];

    /// Parses a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the value if it is not `quiet`, `normal` or
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unorm::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|&(_, level)| level)
            .ok_or_else(|| format!("invalid log level: {s}"))
    }

    /// Level named by [`LOG_MODE_VAR`], if it is set to something valid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|value| Self::parse(&value).ok())
    }

    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::NAMES
            .iter()
            .find(|(_, level)| level == self)
            .map_or("normal", |&(name, _)| name);
        f.write_str(name)
    }
}

/// Writes `LEVEL: message` lines to stderr for messages the configured
/// [`LogLevel`] lets through.
///
/// # Examples
///
/// ```
/// use unorm::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("NFKC renames cannot be undone");
/// logger.debug("suppressed below Verbose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger for `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The level this logger was created with.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Print an error line.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Print a warning line.
    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Print an info line (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Print a debug line (Verbose only).
    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn emit(&self, level: Level, message: impl fmt::Display) {
        if level > self.level.filter() {
            return;
        }
        let tag = match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug | Level::Trace => "DEBUG",
        };
        // A closed stderr has nowhere left to report to.
        let _ = writeln!(io::stderr().lock(), "{tag}: {message}");
    }

    /// Install this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger was already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(self.level.filter());
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        self.emit(record.level(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Pick the logger for a run.
///
/// `--verbose` wins over `--quiet`; with neither flag the level comes from
/// `UNORM_LOG_MODE`, falling back to [`LogLevel::Normal`].
///
/// # Examples
///
/// ```
/// use unorm::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => LogLevel::from_env().unwrap_or(LogLevel::Normal),
    };
    Logger::new(level)
}
