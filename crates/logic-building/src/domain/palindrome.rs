//! Integer palindrome checks

use crate::error::LogicError;

/// Palindrome check by reversing the digits numerically
pub fn is_palindrome_reversal(n: i64) -> Result<bool, LogicError> {
    if n < 0 {
        return Err(LogicError::NegativeInput { value: n });
    }

    let original = n as u64;
    let mut value = original;
    // u128 so reversing a 19-digit value cannot overflow
    let mut reversed: u128 = 0;
    while value > 0 {
        reversed = reversed * 10 + (value % 10) as u128;
        value /= 10;
    }
    Ok(reversed == original as u128)
}

/// Palindrome check by comparing the decimal string with its reflection
pub fn is_palindrome_string(n: i64) -> Result<bool, LogicError> {
    if n < 0 {
        return Err(LogicError::NegativeInput { value: n });
    }

    let digits = n.to_string();
    Ok(digits.bytes().eq(digits.bytes().rev()))
}
