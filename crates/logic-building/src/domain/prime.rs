//! Primality test

/// Prime check by trial division over every candidate in `[2, n - 1]`
///
/// Reference implementation: the scan does not stop at `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}
