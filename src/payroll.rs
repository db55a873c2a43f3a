//! Payroll runs over a batch of employees.
//!
//! A run computes pay for every employee it is given. A failure for one
//! employee is recorded against that employee and the run moves on.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_pay;
use crate::error::EngineError;
use crate::models::{AuditStep, Employee, EmployeeKind};

/// What happened when one employee's pay was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayOutcome {
    /// Pay was computed.
    Paid {
        /// The monthly pay.
        amount: Decimal,
        /// The rules applied.
        audit_steps: Vec<AuditStep>,
    },
    /// The employee's fields violated an invariant.
    Failed {
        /// Why pay could not be computed.
        reason: String,
    },
}

/// One employee's line in a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee's name at the time of the run.
    pub name: String,
    /// The employee's identifier.
    pub employee_id: i64,
    /// The employee's compensation variant.
    pub kind: EmployeeKind,
    /// The computation outcome.
    pub outcome: PayOutcome,
}

impl PayrollEntry {
    /// Returns the computed amount, if pay succeeded.
    pub fn amount(&self) -> Option<Decimal> {
        match &self.outcome {
            PayOutcome::Paid { amount, .. } => Some(*amount),
            PayOutcome::Failed { .. } => None,
        }
    }
}

/// Aggregated figures for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Employees whose pay was computed.
    pub employees_paid: usize,
    /// Employees whose pay could not be computed.
    pub employees_failed: usize,
    /// Sum of all computed pay.
    pub gross_total: Decimal,
}

/// The result of running payroll over a batch of employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub processed_at: DateTime<Utc>,
    /// One entry per employee, in input order.
    pub entries: Vec<PayrollEntry>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
}

/// Computes pay for every employee in `employees`.
///
/// An employee whose pay would push the gross total past the `Decimal`
/// range is recorded as failed and left out of the total.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::payroll::run_payroll;
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     Employee::salaried("Alice", 1, Decimal::from(9000)),
///     Employee::salaried("Broken", 2, Decimal::ZERO),
/// ];
/// let run = run_payroll(&employees);
///
/// assert_eq!(run.totals.employees_paid, 1);
/// assert_eq!(run.totals.employees_failed, 1);
/// assert_eq!(run.totals.gross_total, Decimal::from(9000));
/// ```
pub fn run_payroll(employees: &[Employee]) -> PayrollRun {
    let run_id = Uuid::new_v4();
    let start_time = Instant::now();
    info!(run_id = %run_id, employees = employees.len(), "Starting payroll run");

    let mut totals = PayrollTotals {
        employees_paid: 0,
        employees_failed: 0,
        gross_total: Decimal::ZERO,
    };

    let entries: Vec<PayrollEntry> = employees
        .iter()
        .map(|employee| {
            let paid = calculate_pay(employee, 1).and_then(|breakdown| {
                let gross_total = totals
                    .gross_total
                    .checked_add(breakdown.monthly_pay)
                    .ok_or_else(|| EngineError::Overflow {
                        quantity: "gross_total".to_string(),
                    })?;
                Ok((breakdown, gross_total))
            });

            let outcome = match paid {
                Ok((breakdown, gross_total)) => {
                    totals.employees_paid += 1;
                    totals.gross_total = gross_total;
                    PayOutcome::Paid {
                        amount: breakdown.monthly_pay,
                        audit_steps: breakdown.audit_steps,
                    }
                }
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        employee_id = employee.id(),
                        error = %err,
                        "Pay calculation failed"
                    );
                    totals.employees_failed += 1;
                    PayOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };

            PayrollEntry {
                name: employee.name().to_string(),
                employee_id: employee.id(),
                kind: employee.kind(),
                outcome,
            }
        })
        .collect();

    info!(
        run_id = %run_id,
        paid = totals.employees_paid,
        failed = totals.employees_failed,
        gross_total = %totals.gross_total,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll run completed"
    );

    PayrollRun {
        run_id,
        processed_at: Utc::now(),
        entries,
        totals,
    }
}

impl fmt::Display for PayrollEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            PayOutcome::Paid { amount, .. } => write!(
                f,
                "Employee: {}, ID: {}, Monthly Pay: {:.2}",
                self.name,
                self.employee_id,
                amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            PayOutcome::Failed { reason } => write!(
                f,
                "Error calculating pay for {} (ID {}): {}",
                self.name, self.employee_id, reason
            ),
        }
    }
}

impl fmt::Display for PayrollRun {
    /// Renders one line per employee.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_employees() -> Vec<Employee> {
        vec![
            Employee::salaried("Alice", 1, dec("9000")),
            Employee::hourly("Bob", 2, dec("25"), dec("45")),
            Employee::commissioned("Charlie", 3, dec("5000"), dec("20000"), dec("0.1")),
        ]
    }

    #[test]
    fn test_run_pays_every_employee() {
        let run = run_payroll(&sample_employees());

        let amounts: Vec<Option<Decimal>> = run.entries.iter().map(|e| e.amount()).collect();
        assert_eq!(
            amounts,
            vec![Some(dec("9000")), Some(dec("4750")), Some(dec("7000"))]
        );
        assert_eq!(run.totals.employees_paid, 3);
        assert_eq!(run.totals.employees_failed, 0);
        assert_eq!(run.totals.gross_total, dec("20750"));
    }

    #[test]
    fn test_failure_does_not_stop_run() {
        let employees = vec![
            Employee::hourly("Bad", 1, dec("0"), dec("10")),
            Employee::salaried("Alice", 2, dec("9000")),
        ];

        let run = run_payroll(&employees);

        assert_eq!(run.entries.len(), 2);
        assert_eq!(run.entries[0].amount(), None);
        assert_eq!(run.entries[1].amount(), Some(dec("9000")));
        assert_eq!(run.totals.employees_failed, 1);
        match &run.entries[0].outcome {
            PayOutcome::Failed { reason } => assert!(reason.contains("hourly rate must be positive")),
            other => panic!("Expected Failed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_run() {
        let run = run_payroll(&[]);
        assert!(run.entries.is_empty());
        assert_eq!(run.totals.gross_total, Decimal::ZERO);
        assert_eq!(run.to_string(), "");
    }

    #[test]
    fn test_report_formats_pay_with_two_decimals() {
        let run = run_payroll(&sample_employees());
        let report = run.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Employee: Alice, ID: 1, Monthly Pay: 9000.00",
                "Employee: Bob, ID: 2, Monthly Pay: 4750.00",
                "Employee: Charlie, ID: 3, Monthly Pay: 7000.00",
            ]
        );
    }

    #[test]
    fn test_report_rounds_sub_cent_amounts() {
        let employees = vec![
            // 3000 + 18250.75 * 0.075 = 4368.80625
            Employee::commissioned("Charlie", 3, dec("3000"), dec("18250.75"), dec("0.075")),
            Employee::commissioned("Erin", 5, dec("0"), dec("1"), dec("0.129")),
        ];
        let run = run_payroll(&employees);

        assert_eq!(run.entries[0].amount(), Some(dec("4368.80625")));
        assert_eq!(
            run.to_string(),
            "Employee: Charlie, ID: 3, Monthly Pay: 4368.81\n\
             Employee: Erin, ID: 5, Monthly Pay: 0.13\n"
        );
    }

    #[test]
    fn test_gross_total_overflow_fails_only_that_employee() {
        let huge = dec("70000000000000000000000000000");
        let employees = vec![
            Employee::salaried("First", 1, huge),
            Employee::salaried("Second", 2, huge),
            Employee::salaried("Third", 3, dec("100")),
        ];

        let run = run_payroll(&employees);

        assert_eq!(run.entries.len(), 3);
        assert_eq!(run.totals.employees_paid, 2);
        assert_eq!(run.totals.employees_failed, 1);
        assert_eq!(run.totals.gross_total, huge + dec("100"));
        match &run.entries[1].outcome {
            PayOutcome::Failed { reason } => {
                assert_eq!(reason, "Arithmetic overflow computing gross_total")
            }
            other => panic!("Expected Failed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_employee_does_not_stop_run() {
        let big = dec("1000000000000000");
        let run = run_payroll(&[
            Employee::hourly("Big", 1, big, big),
            Employee::salaried("Alice", 2, dec("9000")),
        ]);

        assert!(matches!(run.entries[0].outcome, PayOutcome::Failed { .. }));
        assert_eq!(run.entries[1].amount(), Some(dec("9000")));
        assert_eq!(run.totals.gross_total, dec("9000"));
    }

    #[test]
    fn test_report_line_for_failure() {
        let run = run_payroll(&[Employee::salaried("Dana", 4, dec("0"))]);

        assert_eq!(
            run.entries[0].to_string(),
            "Error calculating pay for Dana (ID 4): Invalid input for 'monthly_salary': monthly salary must be positive"
        );
    }

    #[test]
    fn test_runs_get_distinct_ids() {
        let employees = sample_employees();
        assert_ne!(run_payroll(&employees).run_id, run_payroll(&employees).run_id);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let run = run_payroll(&[Employee::salaried("Dana", 4, dec("0"))]);
        let json = serde_json::to_value(&run.entries[0]).unwrap();

        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["kind"], "SalariedEmployee");
    }
}
