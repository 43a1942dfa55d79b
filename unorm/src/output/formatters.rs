//! Output formatter implementations.

use serde::Serialize;

use crate::{Error, Result};

use super::{RenameEvent, RenameFormatter};

/// Formatter printing only the new path.
pub struct NewPathFormatter;

impl RenameFormatter for NewPathFormatter {
    fn format(&self, event: &RenameEvent) -> Result<String> {
        Ok(format!("{}\n", event.renamed.display()))
    }
}

/// Formatter printing the original path and, indented below it, the new one.
pub struct BothFormatter;

impl RenameFormatter for BothFormatter {
    fn format(&self, event: &RenameEvent) -> Result<String> {
        Ok(format!(
            "{}\n  -> {}\n",
            event.original.display(),
            event.renamed.display()
        ))
    }
}

/// Formatter emitting one JSON object per line.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonRecord<'a> {
    original: std::borrow::Cow<'a, str>,
    renamed: std::borrow::Cow<'a, str>,
    directory: bool,
    dry_run: bool,
}

impl RenameFormatter for JsonFormatter {
    fn format(&self, event: &RenameEvent) -> Result<String> {
        let record = JsonRecord {
            original: event.original.to_string_lossy(),
            renamed: event.renamed.to_string_lossy(),
            directory: event.is_dir,
            dry_run: event.dry_run,
        };
        let mut line = serde_json::to_string(&record).map_err(|e| Error::Io(e.into()))?;
        line.push('\n');
        Ok(line)
    }
}
