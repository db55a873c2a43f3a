//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! default, so an empty file is a valid configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::export::{EmployeeRecord, WriteMode};

/// Where and how employee records are exported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination of the structured (JSON) sink.
    pub json_path: PathBuf,
    /// Destination of the flat (CSV) sink.
    pub csv_path: PathBuf,
    /// Whether sinks append to or overwrite their files.
    pub mode: WriteMode,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            json_path: PathBuf::from("employees.json"),
            csv_path: PathBuf::from("employees.csv"),
            mode: WriteMode::Append,
        }
    }
}

/// The complete payroll configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Export settings.
    pub export: ExportConfig,
}

/// A roster file: a list of employee records.
///
/// Accepts either a bare list or a mapping with an `employees` key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RosterFile {
    List(Vec<EmployeeRecord>),
    Document { employees: Vec<EmployeeRecord> },
}

impl RosterFile {
    pub(crate) fn into_records(self) -> Vec<EmployeeRecord> {
        match self {
            RosterFile::List(records) => records,
            RosterFile::Document { employees } => employees,
        }
    }
}
