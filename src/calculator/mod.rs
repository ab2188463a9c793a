//! Arithmetic core: operand validation plus the four operations.
//!
//! Every call is stateless. A [`Calculator`] only holds the observer that
//! receives its log events, so one instance can be shared freely across
//! request tasks.

pub mod error;
pub mod number;
pub mod observer;
pub mod operation;
pub mod validate;

pub use error::{OperationError, OperationResult};
pub use number::Number;
pub use observer::{OperationObserver, TracingObserver};
pub use operation::{Operation, UnknownOperation};
pub use validate::validate_operands;

use serde_json::Value;
use std::sync::Arc;

/// Raw operand as received from a caller, not yet known to be numeric
pub type Operand = Value;

#[derive(Clone)]
pub struct Calculator {
    observer: Arc<dyn OperationObserver>,
}

impl Calculator {
    pub fn new(observer: Arc<dyn OperationObserver>) -> Self {
        Self { observer }
    }

    /// Calculator that reports through `tracing`
    pub fn with_tracing() -> Self {
        Self::new(Arc::new(TracingObserver))
    }

    pub fn add(&self, a: &Operand, b: &Operand) -> OperationResult<Number> {
        self.binary(Operation::Add, a, b, |a, b| a + b)
    }

    pub fn subtract(&self, a: &Operand, b: &Operand) -> OperationResult<Number> {
        self.binary(Operation::Subtract, a, b, |a, b| a - b)
    }

    pub fn multiply(&self, a: &Operand, b: &Operand) -> OperationResult<Number> {
        self.binary(Operation::Multiply, a, b, |a, b| a * b)
    }

    /// Divide `a` by `b`. The quotient is always a float; a divisor exactly
    /// equal to zero fails with [`OperationError::DivisionByZero`].
    pub fn divide(&self, a: &Operand, b: &Operand) -> OperationResult<Number> {
        let (a, b) = validate_operands(a, b, self.observer.as_ref())?;
        if b.is_zero() {
            self.observer.division_by_zero(a);
            return Err(OperationError::DivisionByZero);
        }
        let result = a.div_float(b);
        self.observer.performed(Operation::Divide, a, b, result);
        Ok(result)
    }

    pub fn evaluate(&self, op: Operation, a: &Operand, b: &Operand) -> OperationResult<Number> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }

    fn binary(
        &self,
        op: Operation,
        a: &Operand,
        b: &Operand,
        f: fn(Number, Number) -> Number,
    ) -> OperationResult<Number> {
        let (a, b) = validate_operands(a, b, self.observer.as_ref())?;
        let result = f(a, b);
        self.observer.performed(op, a, b, result);
        Ok(result)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_tracing()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator").finish_non_exhaustive()
    }
}
