//! Compute-time invariant checks shared by the pay rules.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Fails with `InvalidInput` unless `value > 0`.
pub(crate) fn require_positive(field: &str, value: Decimal, message: &str) -> EngineResult<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(EngineError::invalid_input(field, message))
    }
}

/// Fails with `InvalidInput` unless `value >= 0`.
pub(crate) fn require_non_negative(
    field: &str,
    value: Decimal,
    message: &str,
) -> EngineResult<()> {
    if value >= Decimal::ZERO {
        Ok(())
    } else {
        Err(EngineError::invalid_input(field, message))
    }
}

/// Fails with `InvalidInput` unless `0 <= value <= 1`.
pub(crate) fn require_fraction(field: &str, value: Decimal, message: &str) -> EngineResult<()> {
    if value >= Decimal::ZERO && value <= Decimal::ONE {
        Ok(())
    } else {
        Err(EngineError::invalid_input(field, message))
    }
}

/// Unwraps the result of a checked operation, failing with `Overflow`.
pub(crate) fn checked(quantity: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::Overflow {
        quantity: quantity.to_string(),
    })
}
