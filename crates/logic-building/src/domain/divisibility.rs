//! Divisibility by 4, 11 and 13
//!
//! The digit-string rules work on arbitrarily long decimal strings. An empty
//! string reads as 0. Non-digit bytes are not rejected: they contribute
//! `byte - b'0'` (wrapping) and the answer is unspecified.

/// Numeric value of one digit byte
#[inline]
fn digit_value(byte: u8) -> u32 {
    u32::from(byte.wrapping_sub(b'0'))
}

/// Divisibility by 4 with the remainder operator
pub fn divisible_by_4_modulo(n: u64) -> bool {
    n % 4 == 0
}

/// Divisibility by 4 from the number formed by the last two digits
pub fn divisible_by_4_last_two(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let tail = &bytes[bytes.len().saturating_sub(2)..];
    let value = tail.iter().fold(0u32, |acc, &b| acc * 10 + digit_value(b));
    value % 4 == 0
}

/// Divisibility by 11 with the remainder operator
pub fn divisible_by_11_modulo(n: u64) -> bool {
    n % 11 == 0
}

/// Divisibility by 11 from the alternating sum of digits
///
/// Digits in odd and even positions (counted from the right) are summed
/// separately; the number is divisible iff their difference is.
pub fn divisible_by_11_alternating(digits: &str) -> bool {
    let mut odd: i64 = 0;
    let mut even: i64 = 0;
    for (position, &b) in digits.as_bytes().iter().rev().enumerate() {
        if position % 2 == 0 {
            odd += i64::from(digit_value(b));
        } else {
            even += i64::from(digit_value(b));
        }
    }
    (odd - even) % 11 == 0
}

/// Divisibility by 13 with the remainder operator
pub fn divisible_by_13_modulo(n: u64) -> bool {
    n % 13 == 0
}

/// Divisibility by 13 by carrying a running remainder across the digits
pub fn divisible_by_13_running(digits: &str) -> bool {
    let remainder = digits
        .bytes()
        .fold(0u32, |rem, b| (rem * 10 + digit_value(b)) % 13);
    remainder == 0
}
