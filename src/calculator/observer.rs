//! Side-effect hooks for calculator operations.
//!
//! The calculator never logs on its own; it reports to an observer handed to it
//! at construction time. Production code uses [`TracingObserver`], tests can
//! plug in a recorder.

use serde_json::Value;
use tracing::{error, info};

use super::{Number, Operation};

pub trait OperationObserver: Send + Sync {
    /// One or both operands failed validation.
    fn invalid_operands(&self, a: &Value, b: &Value);

    /// A division was attempted with a zero divisor.
    fn division_by_zero(&self, dividend: Number);

    /// An operation completed.
    fn performed(&self, op: Operation, a: Number, b: Number, result: Number);
}

/// Writes operation events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl OperationObserver for TracingObserver {
    fn invalid_operands(&self, a: &Value, b: &Value) {
        error!(a = %a, b = %b, "Invalid operands: a={}, b={}", a, b);
    }

    fn division_by_zero(&self, dividend: Number) {
        error!(a = %dividend, "Division by zero attempted.");
    }

    fn performed(&self, op: Operation, a: Number, b: Number, result: Number) {
        info!(
            operation = op.as_str(),
            a = %a,
            b = %b,
            result = %result,
            "{} performed: {} {} {} = {}",
            op.label(),
            a,
            op.symbol(),
            b,
            result
        );
    }
}
