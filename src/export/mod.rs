//! Export of employee records to durable formats.
//!
//! [`to_record`] maps an employee to a flat [`EmployeeRecord`]; a
//! [`RecordSink`] persists a batch of them. Two sinks exist:
//!
//! - [`JsonSink`]: a JSON array keeping only the fields each record has.
//! - [`CsvSink`]: CSV over the full [`CSV_COLUMNS`] set, blank where a field
//!   does not apply.
//!
//! Whether a sink grows or replaces its file is a [`WriteMode`] chosen by
//! the caller.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ExportConfig;
//! use payroll_engine::export::export_employees;
//! use payroll_engine::models::Employee;
//! use rust_decimal::Decimal;
//!
//! let employees = vec![Employee::salaried("Alice", 1, Decimal::from(9000))];
//! export_employees(&employees, &ExportConfig::default())?;
//! # Ok::<(), payroll_engine::error::EngineError>(())
//! ```

mod csv_sink;
mod json_sink;
mod record;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use csv_sink::CsvSink;
pub use json_sink::JsonSink;
pub use record::{CSV_COLUMNS, EmployeeRecord, to_record};

use crate::config::ExportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Whether a sink keeps what is already in its file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Keep existing content and add the new records after it.
    #[default]
    Append,
    /// Replace the file with only the new records.
    Overwrite,
}

impl FromStr for WriteMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(WriteMode::Append),
            "overwrite" => Ok(WriteMode::Overwrite),
            other => Err(EngineError::invalid_input(
                "mode",
                format!("unknown write mode '{}', expected append or overwrite", other),
            )),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Append => f.write_str("append"),
            WriteMode::Overwrite => f.write_str("overwrite"),
        }
    }
}

/// The kind of destination a sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// A JSON document; absent fields are omitted.
    Structured,
    /// A CSV table; absent fields are blank cells.
    Flat,
}

/// A destination for exported employee records.
pub trait RecordSink {
    /// Persists `records` according to the sink's write mode.
    fn write_records(&self, records: &[EmployeeRecord]) -> EngineResult<()>;
}

/// Builds the sink of the given kind for `config`.
pub fn sink_for(kind: SinkKind, config: &ExportConfig) -> Box<dyn RecordSink> {
    match kind {
        SinkKind::Structured => Box::new(JsonSink::new(&config.json_path, config.mode)),
        SinkKind::Flat => Box::new(CsvSink::new(&config.csv_path, config.mode)),
    }
}

/// Writes `employees` to both the structured and the flat sink.
///
/// Records are written for every employee regardless of whether their pay
/// can be computed.
pub fn export_employees(employees: &[Employee], config: &ExportConfig) -> EngineResult<()> {
    let records: Vec<EmployeeRecord> = employees.iter().map(to_record).collect();

    for kind in [SinkKind::Structured, SinkKind::Flat] {
        sink_for(kind, config).write_records(&records)?;
    }

    info!(
        records = records.len(),
        json_path = %config.json_path.display(),
        csv_path = %config.csv_path.display(),
        mode = %config.mode,
        "Exported employee records"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_mode_from_str() {
        assert_eq!("append".parse::<WriteMode>().unwrap(), WriteMode::Append);
        assert_eq!(
            " Overwrite ".parse::<WriteMode>().unwrap(),
            WriteMode::Overwrite
        );
        assert!("truncate".parse::<WriteMode>().is_err());
    }

    #[test]
    fn test_write_mode_defaults_to_append() {
        assert_eq!(WriteMode::default(), WriteMode::Append);
    }

    #[test]
    fn test_write_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&WriteMode::Overwrite).unwrap(),
            "\"overwrite\""
        );
    }

    #[test]
    fn test_export_employees_writes_both_files() {
        let dir = tempdir().unwrap();
        let config = ExportConfig {
            json_path: dir.path().join("employees.json"),
            csv_path: dir.path().join("employees.csv"),
            mode: WriteMode::Append,
        };
        let employees = vec![
            Employee::salaried("Alice", 1, Decimal::from(9000)),
            Employee::salaried("Broken", 2, Decimal::from(-1)),
        ];

        export_employees(&employees, &config).unwrap();

        let json: Vec<serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(&config.json_path).unwrap()).unwrap();
        assert_eq!(json.len(), 2);
        let csv = fs::read_to_string(&config.csv_path).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }
}
