//! Structured (JSON document) sink.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::{EmployeeRecord, RecordSink, WriteMode};

/// Writes records as a pretty-printed JSON array.
///
/// In [`WriteMode::Append`] the existing array in the file is kept and the
/// new records are added after it. A file that cannot be read or does not
/// hold a JSON array is replaced.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
    mode: WriteMode,
}

impl JsonSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// Loads the entries already in the file, or an empty list.
    fn existing_entries(&self) -> Vec<serde_json::Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Existing JSON could not be read, replacing it");
                return Vec::new();
            }
        };
        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) => {
                warn!(path = %self.path.display(), "Existing JSON is not an array, replacing it");
                Vec::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Existing JSON is unreadable, replacing it");
                Vec::new()
            }
        }
    }

    fn export_error(&self, message: impl ToString) -> EngineError {
        EngineError::ExportError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl RecordSink for JsonSink {
    fn write_records(&self, records: &[EmployeeRecord]) -> EngineResult<()> {
        let mut entries = match self.mode {
            WriteMode::Append => self.existing_entries(),
            WriteMode::Overwrite => Vec::new(),
        };
        let kept = entries.len();

        for record in records {
            entries.push(serde_json::to_value(record).map_err(|e| self.export_error(e))?);
        }

        let document = serde_json::to_string_pretty(&entries).map_err(|e| self.export_error(e))?;
        fs::write(&self.path, document).map_err(|e| self.export_error(e))?;

        debug!(
            path = %self.path.display(),
            kept,
            written = records.len(),
            "Wrote JSON records"
        );
        Ok(())
    }
}
