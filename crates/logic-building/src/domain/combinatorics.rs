//! Factorials, combinations and permutations
//!
//! Exact results use `BigUint` so factorial growth never overflows. The
//! logarithmic nCr is float-derived and only approximately correct once the
//! result approaches the limits of `f64` precision.

use crate::error::LogicError;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Factorial with an accumulating loop
pub fn factorial_iterative(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

/// Factorial by direct recursion
pub fn factorial_recursive(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::one()
    } else {
        factorial_recursive(n - 1) * n
    }
}

/// nCr with the multiplicative formula
///
/// Each step multiplies by `n - i` and divides by `i + 1`. The running value
/// is always a binomial coefficient itself, so the division is exact.
pub fn ncr_multiplicative(n: u64, r: u64) -> BigUint {
    if r > n {
        return BigUint::zero();
    }

    let k = r.min(n - r);
    let mut result = BigUint::one();
    for i in 0..k {
        result *= n - i;
        result /= i + 1;
    }
    result
}

/// nCr through `exp(ln n! - ln r! - ln (n - r)!)`
///
/// Returns a float. Callers comparing against an integer need a tolerance.
pub fn ncr_logarithmic(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }

    (ln_factorial(n) - ln_factorial(r) - ln_factorial(n - r)).exp()
}

/// Natural log of `n!` as a sum of logs
fn ln_factorial(n: u64) -> f64 {
    (2..=n).map(|k| (k as f64).ln()).sum()
}

/// nCr by Pascal's rule `C(n, r) = C(n - 1, r - 1) + C(n - 1, r)`
///
/// Exponential time. Validates `0 <= r <= n` before recursing.
pub fn ncr_recursive(n: i64, r: i64) -> Result<u64, LogicError> {
    if n < 0 || r < 0 || r > n {
        return Err(LogicError::OutOfRange { n, r });
    }
    Ok(pascal(n as u64, r as u64))
}

fn pascal(n: u64, r: u64) -> u64 {
    if r == 0 || r == n {
        1
    } else {
        pascal(n - 1, r - 1) + pascal(n - 1, r)
    }
}

/// nPr as the factorial ratio `n! / (n - r)!`
pub fn npr(n: u64, r: u64) -> BigUint {
    if r > n {
        return BigUint::zero();
    }
    factorial_iterative(n) / factorial_iterative(n - r)
}
