use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Numeric value flowing through the calculator.
///
/// Integer inputs stay integers through add/subtract/multiply so that `5 + 7`
/// answers `12` rather than `12.0`. Anything involving a float, and every
/// division, produces a `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Extract a number from a raw operand. Strings, booleans, null and
    /// containers are not numbers and are never coerced.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Number::Int)
                .or_else(|| n.as_f64().map(Number::Float)),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Exact comparison against zero; `-0.0` counts as zero.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    /// False for infinite or NaN floats, which JSON cannot carry.
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(v) => v.is_finite(),
        }
    }

    /// Floating-point quotient. Callers check the divisor first.
    pub fn div_float(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() / rhs.as_f64())
    }

    fn combine(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            // Overflow widens instead of wrapping
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(float_op(a as f64, b as f64))),
            _ => Number::Float(float_op(self.as_f64(), rhs.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole floats
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_only_numbers() {
        assert_eq!(Number::from_value(&json!(5)), Some(Number::Int(5)));
        assert_eq!(Number::from_value(&json!(2.5)), Some(Number::Float(2.5)));
        assert_eq!(Number::from_value(&json!("5")), None);
        assert_eq!(Number::from_value(&json!(true)), None);
        assert_eq!(Number::from_value(&Value::Null), None);
        assert_eq!(Number::from_value(&json!([1])), None);
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let n = Number::from_value(&json!(u64::MAX)).unwrap();
        assert!(matches!(n, Number::Float(_)));
    }

    #[test]
    fn test_integer_kind_is_preserved() {
        assert_eq!(Number::from(5_i64) + Number::from(7_i64), Number::Int(12));
        assert_eq!(Number::Int(15) - Number::Int(4), Number::Int(11));
        assert_eq!(Number::Int(6) * Number::Int(3), Number::Int(18));
    }

    #[test]
    fn test_mixed_kinds_widen_to_float() {
        assert_eq!(Number::Int(1) + Number::from(0.5), Number::Float(1.5));
        assert_eq!(Number::Float(2.0) * Number::Int(3), Number::Float(6.0));
    }

    #[test]
    fn test_overflow_widens_to_float() {
        let sum = Number::Int(i64::MAX) + Number::Int(1);
        assert_eq!(sum, Number::Float(i64::MAX as f64 + 1.0));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(Number::Float(-0.0).is_zero());
        assert!(Number::Int(0).is_zero());
        assert!(!Number::Float(1e-300).is_zero());
    }

    #[test]
    fn test_float_overflow_is_not_finite() {
        assert!(!(Number::from(1e308) * Number::from(10_i64)).is_finite());
        assert!(!Number::from(1e308).div_float(Number::from(1e-308)).is_finite());
        assert!(Number::from(i64::MAX).is_finite());
        assert!(Number::from(1.5).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(12).to_string(), "12");
        assert_eq!(Number::Float(4.0).to_string(), "4.0");
        assert_eq!(serde_json::to_string(&Number::Float(4.0)).unwrap(), "4.0");
        assert_eq!(serde_json::to_string(&Number::Int(4)).unwrap(), "4");
    }
}
