//! Core data models for the payroll engine.
//!
//! This module contains the employee model, its compensation variants and
//! the pay breakdown produced by a calculation.

mod audit;
mod employee;

pub use audit::{AuditStep, PayBreakdown};
pub use employee::{
    CommissionedEmployee, Compensation, Employee, EmployeeKind, HourlyEmployee, SalariedEmployee,
};
