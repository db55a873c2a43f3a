//! Commissioned pay calculation.
//!
//! Pay is the base salary plus a fraction of sales. No period scaling is
//! applied; the inputs are taken to describe one month.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, CommissionedEmployee};

use super::validation::{checked, require_fraction, require_non_negative};

/// The result of a commissioned pay calculation.
#[derive(Debug, Clone)]
pub struct CommissionPayResult {
    /// The commission earned on sales.
    pub commission: Decimal,
    /// Base salary plus commission.
    pub monthly_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the pay for a commissioned employee.
///
/// # Errors
///
/// Returns `InvalidInput` when `base_salary` or `sales_amount` is negative,
/// or when `commission_rate` lies outside `[0, 1]`, checked in that order.
/// Returns `Overflow` when base plus commission exceeds the `Decimal` range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_commission_pay;
/// use payroll_engine::models::CommissionedEmployee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let terms = CommissionedEmployee {
///     base_salary: Decimal::from(3000),
///     sales_amount: Decimal::from(20000),
///     commission_rate: Decimal::from_str("0.1").unwrap(),
/// };
/// let result = calculate_commission_pay(&terms, 1).unwrap();
/// assert_eq!(result.commission, Decimal::from(2000));
/// assert_eq!(result.monthly_pay, Decimal::from(5000));
/// ```
pub fn calculate_commission_pay(
    terms: &CommissionedEmployee,
    step_number: u32,
) -> EngineResult<CommissionPayResult> {
    require_non_negative(
        "base_salary",
        terms.base_salary,
        "base salary must be non-negative",
    )?;
    require_non_negative(
        "sales_amount",
        terms.sales_amount,
        "sales amount must be non-negative",
    )?;
    require_fraction(
        "commission_rate",
        terms.commission_rate,
        "commission rate must be between 0 and 1",
    )?;

    let commission = checked(
        "commission",
        terms.sales_amount.checked_mul(terms.commission_rate),
    )?;
    let monthly_pay = checked("monthly_pay", terms.base_salary.checked_add(commission))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "commission_pay".to_string(),
        rule_name: "Base Plus Commission".to_string(),
        input: serde_json::json!({
            "base_salary": terms.base_salary.normalize().to_string(),
            "sales_amount": terms.sales_amount.normalize().to_string(),
            "commission_rate": terms.commission_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "commission": commission.normalize().to_string(),
            "monthly_pay": monthly_pay.normalize().to_string()
        }),
        reasoning: format!(
            "${} base + ${} sales x {} = ${}",
            terms.base_salary.normalize(),
            terms.sales_amount.normalize(),
            terms.commission_rate.normalize(),
            monthly_pay.normalize()
        ),
    };

    Ok(CommissionPayResult {
        commission,
        monthly_pay,
        audit_step,
    })
}
