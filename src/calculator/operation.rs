use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase name, also used as the route segment
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => constants::ADD_OP,
            Operation::Subtract => constants::SUBTRACT_OP,
            Operation::Multiply => constants::MULTIPLY_OP,
            Operation::Divide => constants::DIVIDE_OP,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Noun used in log lines ("Addition performed: ...")
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{}', expected one of: {}", .0, supported_names())]
pub struct UnknownOperation(pub String);

fn supported_names() -> String {
    constants::get_supported_operations().join(", ")
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" Divide ".parse::<Operation>().unwrap(), Operation::Divide);
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_operation_message_lists_supported() {
        let err = "pow".parse::<Operation>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown operation 'pow', expected one of: add, subtract, multiply, divide"
        );

        let boxed: Box<dyn std::error::Error + Send + Sync> = err.into();
        assert!(boxed.to_string().starts_with("unknown operation 'pow'"));
    }
}
