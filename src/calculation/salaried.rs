//! Salaried pay calculation.
//!
//! A salaried employee is paid the stored monthly salary unchanged, provided
//! it is positive.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, SalariedEmployee};

use super::validation::require_positive;

/// The result of a salaried pay calculation.
#[derive(Debug, Clone)]
pub struct SalariedPayResult {
    /// The monthly pay.
    pub monthly_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly pay for a salaried employee.
///
/// # Errors
///
/// Returns `InvalidInput` on `monthly_salary` when it is zero or negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salaried_pay;
/// use payroll_engine::models::SalariedEmployee;
/// use rust_decimal::Decimal;
///
/// let terms = SalariedEmployee { monthly_salary: Decimal::from(9000) };
/// let result = calculate_salaried_pay(&terms, 1).unwrap();
/// assert_eq!(result.monthly_pay, Decimal::from(9000));
/// ```
pub fn calculate_salaried_pay(
    terms: &SalariedEmployee,
    step_number: u32,
) -> EngineResult<SalariedPayResult> {
    require_positive(
        "monthly_salary",
        terms.monthly_salary,
        "monthly salary must be positive",
    )?;

    let monthly_pay = terms.monthly_salary;
    let audit_step = AuditStep {
        step_number,
        rule_id: "salaried_pay".to_string(),
        rule_name: "Salaried Pay".to_string(),
        input: serde_json::json!({
            "monthly_salary": terms.monthly_salary.to_string()
        }),
        output: serde_json::json!({
            "monthly_pay": monthly_pay.to_string()
        }),
        reasoning: format!("Fixed monthly salary of ${} paid unchanged", monthly_pay),
    };

    Ok(SalariedPayResult {
        monthly_pay,
        audit_step,
    })
}
