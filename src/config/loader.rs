//! Configuration and roster loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration, and [`load_roster`] for reading employees from a file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{ExportConfig, PayrollConfig, RosterFile};

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```yaml
/// export:
///   json_path: employees.json
///   csv_path: employees.csv
///   mode: append          # append | overwrite
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./payroll.yaml")?;
/// println!("JSON export: {}", loader.export().json_path.display());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file exists but cannot be read (`ConfigReadError`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = load_yaml::<PayrollConfig>(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "Loaded payroll configuration");
        Ok(Self { config })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.config.export
    }
}

/// Loads employees from a roster file.
///
/// Files ending in `.json` are read as JSON, anything else as YAML. The
/// roster is either a list of records or a mapping with an `employees` list;
/// each record has the same shape as an exported JSON record.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_roster;
///
/// let employees = load_roster("./roster.yaml")?;
/// println!("Loaded {} employees", employees.len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let roster = if path.extension().is_some_and(|ext| ext == "json") {
        let content = read_file(path)?;
        // Numbers are buffered by the untagged roster enum; going through
        // `Value` hands integer ids over as integers.
        serde_json::from_str::<serde_json::Value>(&content)
            .and_then(serde_json::from_value::<RosterFile>)
            .map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
    } else {
        load_yaml::<RosterFile>(path)?
    };

    let employees = roster
        .into_records()
        .into_iter()
        .map(|record| {
            Employee::try_from(record).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(path = %path_str, employees = employees.len(), "Loaded roster");
    Ok(employees)
}

fn read_file(path: &Path) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EngineError::ConfigNotFound {
            path: path.display().to_string(),
        },
        _ => EngineError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let content = read_file(path)?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
