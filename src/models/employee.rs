//! Employee model and compensation variants.
//!
//! An [`Employee`] always carries exactly one [`Compensation`] variant, so an
//! employee without a pay model cannot be constructed.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_pay;
use crate::error::EngineResult;

/// Discriminator for the three compensation variants.
///
/// Serializes to the variant name used in exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeKind {
    /// Fixed monthly salary.
    SalariedEmployee,
    /// Hourly rate with weekly overtime.
    HourlyEmployee,
    /// Base salary plus sales commission.
    CommissionedEmployee,
}

impl EmployeeKind {
    /// Returns the discriminator as written in the `type` field of a record.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeKind::SalariedEmployee => "SalariedEmployee",
            EmployeeKind::HourlyEmployee => "HourlyEmployee",
            EmployeeKind::CommissionedEmployee => "CommissionedEmployee",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pay terms of a salaried employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalariedEmployee {
    /// The fixed amount paid each month.
    pub monthly_salary: Decimal,
}

/// Pay terms of an hourly employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyEmployee {
    /// The rate paid per ordinary hour.
    pub hourly_rate: Decimal,
    /// Hours worked in one week.
    pub hours_worked: Decimal,
}

/// Pay terms of a commissioned employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionedEmployee {
    /// The base salary for the period.
    pub base_salary: Decimal,
    /// Total sales made in the period.
    pub sales_amount: Decimal,
    /// Fraction of sales paid as commission, expected in `[0, 1]`.
    pub commission_rate: Decimal,
}

/// The compensation model of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compensation {
    /// See [`SalariedEmployee`].
    Salaried(SalariedEmployee),
    /// See [`HourlyEmployee`].
    Hourly(HourlyEmployee),
    /// See [`CommissionedEmployee`].
    Commissioned(CommissionedEmployee),
}

impl Compensation {
    /// Returns the discriminator for this variant.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Compensation::Salaried(_) => EmployeeKind::SalariedEmployee,
            Compensation::Hourly(_) => EmployeeKind::HourlyEmployee,
            Compensation::Commissioned(_) => EmployeeKind::CommissionedEmployee,
        }
    }
}

/// An employee subject to payroll.
///
/// Fields are not validated at construction; invariants are checked when
/// pay is computed.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::salaried("Alice", 1, Decimal::from(9000));
/// employee.set_name("Sidra");
///
/// assert_eq!(employee.name(), "Sidra");
/// assert_eq!(employee.id(), 1);
/// assert_eq!(employee.compute_pay().unwrap(), Decimal::from(9000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    id: i64,
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee with the given compensation model.
    pub fn new(name: impl Into<String>, id: i64, compensation: Compensation) -> Self {
        Self {
            name: name.into(),
            id,
            compensation,
        }
    }

    /// Creates a salaried employee.
    pub fn salaried(name: impl Into<String>, id: i64, monthly_salary: Decimal) -> Self {
        Self::new(
            name,
            id,
            Compensation::Salaried(SalariedEmployee { monthly_salary }),
        )
    }

    /// Creates an hourly employee.
    pub fn hourly(
        name: impl Into<String>,
        id: i64,
        hourly_rate: Decimal,
        hours_worked: Decimal,
    ) -> Self {
        Self::new(
            name,
            id,
            Compensation::Hourly(HourlyEmployee {
                hourly_rate,
                hours_worked,
            }),
        )
    }

    /// Creates a commissioned employee.
    pub fn commissioned(
        name: impl Into<String>,
        id: i64,
        base_salary: Decimal,
        sales_amount: Decimal,
        commission_rate: Decimal,
    ) -> Self {
        Self::new(
            name,
            id,
            Compensation::Commissioned(CommissionedEmployee {
                base_salary,
                sales_amount,
                commission_rate,
            }),
        )
    }

    /// Returns the employee's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the employee's display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the caller-supplied identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the compensation model.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns the variant discriminator.
    pub fn kind(&self) -> EmployeeKind {
        self.compensation.kind()
    }

    /// Computes the monthly pay for this employee.
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// when a stored field violates its variant's invariant, and
    /// [`EngineError::Overflow`](crate::error::EngineError::Overflow) when the
    /// result does not fit in a `Decimal`. Calling this
    /// repeatedly on an unchanged employee yields the same result.
    pub fn compute_pay(&self) -> EngineResult<Decimal> {
        calculate_pay(self, 1).map(|breakdown| breakdown.monthly_pay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(
            Employee::salaried("Alice", 1, dec("9000")).kind(),
            EmployeeKind::SalariedEmployee
        );
        assert_eq!(
            Employee::hourly("Bob", 2, dec("25"), dec("45")).kind(),
            EmployeeKind::HourlyEmployee
        );
        assert_eq!(
            Employee::commissioned("Charlie", 3, dec("5000"), dec("20000"), dec("0.1")).kind(),
            EmployeeKind::CommissionedEmployee
        );
    }

    #[test]
    fn test_set_name_keeps_id() {
        let mut employee = Employee::salaried("Alice", 1, dec("9000"));
        employee.set_name("Sidra");

        assert_eq!(employee.name(), "Sidra");
        assert_eq!(employee.id(), 1);
    }

    #[test]
    fn test_rename_does_not_change_pay() {
        let mut employee = Employee::hourly("Bob", 2, dec("25"), dec("45"));
        let before = employee.compute_pay().unwrap();
        employee.set_name("Robert");
        let after = employee.compute_pay().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_compute_pay_is_idempotent() {
        let employee = Employee::commissioned("Charlie", 3, dec("3000"), dec("20000"), dec("0.1"));

        assert_eq!(employee.compute_pay().unwrap(), employee.compute_pay().unwrap());
    }

    #[test]
    fn test_construction_does_not_validate() {
        let employee = Employee::salaried("Dana", 4, dec("-1"));

        assert_eq!(employee.id(), 4);
        assert!(matches!(
            employee.compute_pay(),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeKind::SalariedEmployee).unwrap(),
            "\"SalariedEmployee\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeKind::HourlyEmployee).unwrap(),
            "\"HourlyEmployee\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeKind::CommissionedEmployee).unwrap(),
            "\"CommissionedEmployee\""
        );
    }

    #[test]
    fn test_kind_display_matches_serialized_name() {
        for kind in [
            EmployeeKind::SalariedEmployee,
            EmployeeKind::HourlyEmployee,
            EmployeeKind::CommissionedEmployee,
        ] {
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind)
            );
        }
    }

    #[test]
    fn test_employee_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Employee>();
    }
}
