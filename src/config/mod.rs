//! Configuration loading for the payroll engine.
//!
//! This module loads the payroll configuration (export destinations and
//! write mode) from YAML, and employee rosters from YAML or JSON.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Export mode: {}", config.export().mode);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, load_roster};
pub use types::{ExportConfig, PayrollConfig};
