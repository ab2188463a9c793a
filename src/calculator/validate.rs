use serde_json::Value;

use super::error::{OperationError, OperationResult};
use super::observer::OperationObserver;
use super::Number;

/// Check that both operands are numeric and return them as [`Number`]s.
///
/// Runs before any operation-specific logic. On failure the observer is told
/// about both operands, whichever one was at fault.
pub fn validate_operands(
    a: &Value,
    b: &Value,
    observer: &dyn OperationObserver,
) -> OperationResult<(Number, Number)> {
    match (Number::from_value(a), Number::from_value(b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => {
            observer.invalid_operands(a, b);
            Err(OperationError::InvalidOperand)
        }
    }
}
