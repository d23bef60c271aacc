//! Error types
//!
//! Only a handful of units validate their input. Everything else is
//! garbage-in-garbage-out and has no error path.

use thiserror::Error;

/// Input validation failure raised by the validating units
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    /// Negative value passed to a unit that requires a natural number
    #[error("Invalid input: expected a non-negative number, got {value}")]
    NegativeInput { value: i64 },
    /// `r` outside `0..=n` for the recursive binomial coefficient
    #[error("Invalid input: nCr requires 0 <= r <= n, got n = {n}, r = {r}")]
    OutOfRange { n: i64, r: i64 },
}

/// A literal example whose actual output did not match the expected one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{unit}({input}): expected {expected}, got {actual}")]
pub struct CheckFailure {
    /// Unit under check
    pub unit: &'static str,
    /// Rendered example input
    pub input: String,
    /// Rendered expected output
    pub expected: String,
    /// Rendered actual output
    pub actual: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_input_message() {
        let err = LogicError::NegativeInput { value: -5 };
        assert_eq!(
            err.to_string(),
            "Invalid input: expected a non-negative number, got -5"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = LogicError::OutOfRange { n: 3, r: 4 };
        assert!(err.to_string().contains("n = 3, r = 4"));
    }

    #[test]
    fn test_check_failure_message() {
        let failure = CheckFailure {
            unit: "is_prime",
            input: "4".to_string(),
            expected: "false".to_string(),
            actual: "true".to_string(),
        };
        assert_eq!(failure.to_string(), "is_prime(4): expected false, got true");
    }
}
