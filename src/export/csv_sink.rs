//! Flat (CSV) sink.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::{CSV_COLUMNS, EmployeeRecord, RecordSink, WriteMode};

/// Writes records as CSV rows over the fixed [`CSV_COLUMNS`].
///
/// In [`WriteMode::Append`] rows are added to the end of the file and the
/// header is written only when the file is missing or empty.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
    mode: WriteMode,
}

impl CsvSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    fn open(&self) -> EngineResult<(File, bool)> {
        let result = match self.mode {
            WriteMode::Append => {
                let needs_header = fs::metadata(&self.path)
                    .map(|meta| meta.len() == 0)
                    .unwrap_or(true);
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)
                    .map(|file| (file, needs_header))
            }
            WriteMode::Overwrite => File::create(&self.path).map(|file| (file, true)),
        };
        result.map_err(|e| self.export_error(e))
    }

    fn export_error(&self, message: impl ToString) -> EngineError {
        EngineError::ExportError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl RecordSink for CsvSink {
    fn write_records(&self, records: &[EmployeeRecord]) -> EngineResult<()> {
        let (file, needs_header) = self.open()?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer
                .write_record(CSV_COLUMNS)
                .map_err(|e| self.export_error(e))?;
        }
        for record in records {
            writer
                .write_record(record.csv_row())
                .map_err(|e| self.export_error(e))?;
        }
        writer.flush().map_err(|e| self.export_error(e))?;

        debug!(
            path = %self.path.display(),
            header = needs_header,
            written = records.len(),
            "Wrote CSV records"
        );
        Ok(())
    }
}
