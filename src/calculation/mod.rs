//! Calculation logic for the payroll engine.
//!
//! One pure calculation function per compensation variant, plus
//! [`calculate_pay`] which dispatches on an employee's variant and collects
//! the audit steps into a [`PayBreakdown`].

mod commission;
mod hourly;
mod salaried;
mod validation;

pub use commission::{CommissionPayResult, calculate_commission_pay};
pub use hourly::{
    HourlyPayResult, OVERTIME_MULTIPLIER, WEEKLY_WORKING_HOURS, WEEKS_PER_MONTH,
    calculate_hourly_pay,
};
pub use salaried::{SalariedPayResult, calculate_salaried_pay};

use crate::error::EngineResult;
use crate::models::{Compensation, Employee, PayBreakdown};

/// Calculates an employee's monthly pay along with its audit steps.
///
/// Step numbers start at `step_number_start` and increase by one per rule.
///
/// # Errors
///
/// Returns `InvalidInput` when the employee's stored fields violate the
/// invariant of their variant, or `Overflow` when a pay figure exceeds the
/// `Decimal` range.
pub fn calculate_pay(employee: &Employee, step_number_start: u32) -> EngineResult<PayBreakdown> {
    let (monthly_pay, audit_steps) = match employee.compensation() {
        Compensation::Salaried(terms) => {
            let result = calculate_salaried_pay(terms, step_number_start)?;
            (result.monthly_pay, vec![result.audit_step])
        }
        Compensation::Hourly(terms) => {
            let result = calculate_hourly_pay(terms, step_number_start)?;
            (result.monthly_pay, result.audit_steps)
        }
        Compensation::Commissioned(terms) => {
            let result = calculate_commission_pay(terms, step_number_start)?;
            (result.monthly_pay, vec![result.audit_step])
        }
    };

    Ok(PayBreakdown {
        employee_id: employee.id(),
        kind: employee.kind(),
        monthly_pay,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeKind;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Decimal with two fractional digits in `[lo, hi]` cents.
    fn cents(lo: i64, hi: i64) -> impl Strategy<Value = Decimal> {
        (lo..=hi).prop_map(|c| Decimal::new(c, 2))
    }

    #[test]
    fn test_dispatches_on_variant() {
        let salaried = calculate_pay(&Employee::salaried("Alice", 1, dec("9000")), 1).unwrap();
        assert_eq!(salaried.kind, EmployeeKind::SalariedEmployee);
        assert_eq!(salaried.monthly_pay, dec("9000"));

        let hourly = calculate_pay(&Employee::hourly("Bob", 2, dec("25"), dec("45")), 1).unwrap();
        assert_eq!(hourly.kind, EmployeeKind::HourlyEmployee);
        assert_eq!(hourly.monthly_pay, dec("4750"));

        let commissioned = calculate_pay(
            &Employee::commissioned("Charlie", 3, dec("5000"), dec("20000"), dec("0.1")),
            1,
        )
        .unwrap();
        assert_eq!(commissioned.kind, EmployeeKind::CommissionedEmployee);
        assert_eq!(commissioned.monthly_pay, dec("7000"));
    }

    #[test]
    fn test_breakdown_carries_employee_id() {
        let breakdown = calculate_pay(&Employee::salaried("Alice", 42, dec("1")), 1).unwrap();
        assert_eq!(breakdown.employee_id, 42);
    }

    #[test]
    fn test_compute_pay_matches_breakdown() {
        let employee = Employee::hourly("Bob", 2, dec("19.75"), dec("52.25"));
        let breakdown = calculate_pay(&employee, 10).unwrap();
        assert_eq!(employee.compute_pay().unwrap(), breakdown.monthly_pay);
    }

    proptest! {
        #[test]
        fn prop_positive_salary_is_paid_unchanged(salary in cents(1, 100_000_000)) {
            let employee = Employee::salaried("P", 1, salary);
            prop_assert_eq!(employee.compute_pay().unwrap(), salary);
        }

        #[test]
        fn prop_non_positive_salary_is_rejected(salary in cents(-100_000_000, 0)) {
            let employee = Employee::salaried("P", 1, salary);
            prop_assert!(employee.compute_pay().is_err());
        }

        #[test]
        fn prop_no_overtime_up_to_forty_hours(
            rate in cents(1, 50_000),
            hours in cents(0, 4_000),
        ) {
            let employee = Employee::hourly("P", 1, rate, hours);
            prop_assert_eq!(
                employee.compute_pay().unwrap(),
                hours * rate * WEEKS_PER_MONTH
            );
        }

        #[test]
        fn prop_overtime_formula_above_forty_hours(
            rate in cents(1, 50_000),
            hours in cents(4_001, 16_800),
        ) {
            let employee = Employee::hourly("P", 1, rate, hours);
            let overtime = hours - WEEKLY_WORKING_HOURS;
            let weekly = WEEKLY_WORKING_HOURS * rate + OVERTIME_MULTIPLIER * rate * overtime;
            prop_assert_eq!(employee.compute_pay().unwrap(), weekly * WEEKS_PER_MONTH);
        }

        #[test]
        fn prop_overtime_never_pays_less_than_straight_time(
            rate in cents(1, 50_000),
            hours in cents(0, 16_800),
        ) {
            let employee = Employee::hourly("P", 1, rate, hours);
            prop_assert!(employee.compute_pay().unwrap() >= hours * rate * WEEKS_PER_MONTH);
        }

        #[test]
        fn prop_commission_rate_in_unit_interval_succeeds(
            base in cents(0, 10_000_000),
            sales in cents(0, 100_000_000),
            rate in (0i64..=10_000).prop_map(|r| Decimal::new(r, 4)),
        ) {
            let employee = Employee::commissioned("P", 1, base, sales, rate);
            prop_assert_eq!(employee.compute_pay().unwrap(), base + sales * rate);
        }

        #[test]
        fn prop_commission_rate_above_one_fails(
            rate in (10_001i64..=100_000).prop_map(|r| Decimal::new(r, 4)),
        ) {
            let employee = Employee::commissioned("P", 1, Decimal::ONE, Decimal::ONE, rate);
            prop_assert!(employee.compute_pay().is_err());
        }

        #[test]
        fn prop_compute_pay_is_idempotent_and_name_independent(
            rate in cents(1, 50_000),
            hours in cents(0, 16_800),
            name in "[A-Za-z ]{0,20}",
        ) {
            let mut employee = Employee::hourly("P", 1, rate, hours);
            let first = employee.compute_pay().unwrap();
            prop_assert_eq!(employee.compute_pay().unwrap(), first);
            employee.set_name(name);
            prop_assert_eq!(employee.compute_pay().unwrap(), first);
        }
    }
}
