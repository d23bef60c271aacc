//! Digit sums and digital roots

use crate::error::LogicError;

/// Sum of decimal digits with a loop
pub fn sum_of_digits_iterative(n: u64) -> u64 {
    let mut value = n;
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Sum of decimal digits by recursion on `n / 10`
pub fn sum_of_digits_recursive(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        n % 10 + sum_of_digits_recursive(n / 10)
    }
}

/// Digital root by summing digits until a single digit remains
pub fn digital_root_repeated(n: i64) -> Result<u64, LogicError> {
    if n < 0 {
        return Err(LogicError::NegativeInput { value: n });
    }

    let mut value = n as u64;
    while value > 9 {
        value = sum_of_digits_iterative(value);
    }
    Ok(value)
}

/// Digital root through the congruence `1 + (n - 1) mod 9`
pub fn digital_root_formula(n: i64) -> Result<u64, LogicError> {
    if n < 0 {
        return Err(LogicError::NegativeInput { value: n });
    }
    if n == 0 {
        return Ok(0);
    }
    Ok(1 + (n as u64 - 1) % 9)
}
