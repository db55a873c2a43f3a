//! Hourly pay calculation with weekly overtime.
//!
//! ## Rate Structure
//!
//! - Hours up to [`WEEKLY_WORKING_HOURS`] in a week are paid at the hourly rate.
//! - Hours beyond that are paid at [`OVERTIME_MULTIPLIER`] times the rate.
//! - The weekly figure is multiplied by [`WEEKS_PER_MONTH`].
//!
//! Only one weekly hours figure is stored, so every week of the month is
//! assumed to look the same and the overtime threshold applies per week.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AuditStep, HourlyEmployee};

use super::validation::{checked, require_non_negative, require_positive};

/// Ordinary hours in a week before overtime applies.
pub const WEEKLY_WORKING_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the hourly rate for overtime hours (150%).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Weeks used to scale a weekly figure to a month.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// The result of an hourly pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPayResult {
    /// Hours paid at the ordinary rate each week.
    pub ordinary_hours: Decimal,
    /// Hours paid at the overtime rate each week.
    pub overtime_hours: Decimal,
    /// Total pay for one week.
    pub weekly_pay: Decimal,
    /// Weekly pay scaled to a month.
    pub monthly_pay: Decimal,
    /// Audit steps for the ordinary, overtime and monthly scaling rules.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the monthly pay for an hourly employee.
///
/// # Errors
///
/// Returns `InvalidInput` when `hours_worked` is negative, or when
/// `hourly_rate` is zero or negative. Hours are checked first. Returns
/// `Overflow` when a pay figure exceeds the `Decimal` range.
///
/// # Examples
///
/// ## No overtime
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use payroll_engine::models::HourlyEmployee;
/// use rust_decimal::Decimal;
///
/// let terms = HourlyEmployee {
///     hourly_rate: Decimal::from(25),
///     hours_worked: Decimal::from(38),
/// };
/// let result = calculate_hourly_pay(&terms, 1).unwrap();
/// assert_eq!(result.monthly_pay, Decimal::from(3800));
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Five hours of overtime
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use payroll_engine::models::HourlyEmployee;
/// use rust_decimal::Decimal;
///
/// let terms = HourlyEmployee {
///     hourly_rate: Decimal::from(20),
///     hours_worked: Decimal::from(45),
/// };
/// let result = calculate_hourly_pay(&terms, 1).unwrap();
/// assert_eq!(result.weekly_pay, Decimal::from(950));
/// assert_eq!(result.monthly_pay, Decimal::from(3800));
/// ```
pub fn calculate_hourly_pay(
    terms: &HourlyEmployee,
    step_number_start: u32,
) -> EngineResult<HourlyPayResult> {
    require_non_negative(
        "hours_worked",
        terms.hours_worked,
        "hours worked must be non-negative",
    )?;
    require_positive(
        "hourly_rate",
        terms.hourly_rate,
        "hourly rate must be positive",
    )?;

    let rate = terms.hourly_rate;
    let mut audit_steps = Vec::new();
    let mut step_number = step_number_start;

    let (ordinary_hours, overtime_hours) = if terms.hours_worked <= WEEKLY_WORKING_HOURS {
        (terms.hours_worked, Decimal::ZERO)
    } else {
        (
            WEEKLY_WORKING_HOURS,
            terms.hours_worked - WEEKLY_WORKING_HOURS,
        )
    };

    let ordinary_pay = checked("ordinary_pay", ordinary_hours.checked_mul(rate))?;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "hourly_ordinary".to_string(),
        rule_name: "Hourly Ordinary Time".to_string(),
        input: serde_json::json!({
            "hours_worked": terms.hours_worked.normalize().to_string(),
            "hourly_rate": rate.normalize().to_string(),
            "weekly_threshold": WEEKLY_WORKING_HOURS.to_string()
        }),
        output: serde_json::json!({
            "ordinary_hours": ordinary_hours.normalize().to_string(),
            "ordinary_pay": ordinary_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} ordinary hours x ${} = ${}",
            ordinary_hours.normalize(),
            rate.normalize(),
            ordinary_pay.normalize()
        ),
    });
    step_number += 1;

    let mut weekly_pay = ordinary_pay;

    if overtime_hours > Decimal::ZERO {
        let overtime_rate = checked("overtime_rate", OVERTIME_MULTIPLIER.checked_mul(rate))?;
        let overtime_pay = checked("overtime_pay", overtime_rate.checked_mul(overtime_hours))?;
        weekly_pay = checked("weekly_pay", weekly_pay.checked_add(overtime_pay))?;

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "hourly_overtime".to_string(),
            rule_name: "Hourly Overtime".to_string(),
            input: serde_json::json!({
                "overtime_hours": overtime_hours.normalize().to_string(),
                "hourly_rate": rate.normalize().to_string(),
                "multiplier": OVERTIME_MULTIPLIER.to_string()
            }),
            output: serde_json::json!({
                "overtime_rate": overtime_rate.normalize().to_string(),
                "overtime_pay": overtime_pay.normalize().to_string()
            }),
            reasoning: format!(
                "{} overtime hours beyond {} at {}% x ${} = ${}",
                overtime_hours.normalize(),
                WEEKLY_WORKING_HOURS,
                (OVERTIME_MULTIPLIER * Decimal::ONE_HUNDRED).normalize(),
                rate.normalize(),
                overtime_pay.normalize()
            ),
        });
        step_number += 1;
    }

    let monthly_pay = checked("monthly_pay", weekly_pay.checked_mul(WEEKS_PER_MONTH))?;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "monthly_scaling".to_string(),
        rule_name: "Monthly Scaling".to_string(),
        input: serde_json::json!({
            "weekly_pay": weekly_pay.normalize().to_string(),
            "weeks_per_month": WEEKS_PER_MONTH.to_string()
        }),
        output: serde_json::json!({
            "monthly_pay": monthly_pay.normalize().to_string()
        }),
        reasoning: format!(
            "${} per week x {} weeks = ${}",
            weekly_pay.normalize(),
            WEEKS_PER_MONTH,
            monthly_pay.normalize()
        ),
    });

    Ok(HourlyPayResult {
        ordinary_hours,
        overtime_hours,
        weekly_pay,
        monthly_pay,
        audit_steps,
    })
}
