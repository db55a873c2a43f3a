//! Pay breakdown and audit step models.
//!
//! Every pay calculation records the rules it applied as a sequence of
//! [`AuditStep`]s, so a computed figure can be explained after the fact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeKind;

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The result of computing one employee's pay.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::models::{Employee, EmployeeKind};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::hourly("Bob", 2, Decimal::from(20), Decimal::from(45));
/// let breakdown = calculate_pay(&employee, 1).unwrap();
///
/// assert_eq!(breakdown.kind, EmployeeKind::HourlyEmployee);
/// assert_eq!(breakdown.monthly_pay, Decimal::from(3800));
/// assert!(!breakdown.audit_steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The ID of the employee the calculation is for.
    pub employee_id: i64,
    /// The compensation variant that was applied.
    pub kind: EmployeeKind,
    /// The computed pay for the month.
    pub monthly_pay: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}
