//! Payroll engine
//!
//! This crate computes monthly pay for salaried, hourly and commissioned
//! employees, runs payroll over a batch of them, and exports employee
//! records to JSON and CSV.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod payroll;
pub mod prompt;
