//! Even/odd checks

/// Check parity with the remainder operator
pub fn is_even_remainder(n: i64) -> bool {
    n % 2 == 0
}

/// Check parity by masking the lowest bit
pub fn is_even_bitwise(n: i64) -> bool {
    n & 1 == 0
}

/// Check parity by shifting the lowest bit out and back in
///
/// An odd number loses its lowest bit on the round trip and no longer
/// compares equal. Arithmetic shift keeps this valid for negative input.
pub fn is_even_shift(n: i64) -> bool {
    (n >> 1) << 1 == n
}
