use thiserror::Error;

/// Failure of a single calculator operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("Both operands must be numbers.")]
    InvalidOperand,

    #[error("Cannot divide by zero.")]
    DivisionByZero,
}

pub type OperationResult<T> = std::result::Result<T, OperationError>;
