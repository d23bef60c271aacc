//! Check whether a number is an integral power of a base

/// Power-of check through the logarithm ratio `ln n / ln base`
///
/// The ratio is compared against its own truncation with exact float
/// equality. Large exponents can round to a neighbouring integer or miss one;
/// that imprecision belongs to this technique.
pub fn is_power_of_log(base: u64, n: u64) -> bool {
    if n == 0 {
        return false;
    }
    if n == 1 {
        return true;
    }
    if base <= 1 {
        return false;
    }

    let ratio = (n as f64).ln() / (base as f64).ln();
    ratio == ratio.trunc()
}

/// Power-of check by multiplying the base until it reaches `n`
pub fn is_power_of_multiplication(base: u64, n: u64) -> bool {
    if n == 0 {
        return false;
    }
    if n == 1 {
        return true;
    }
    if base <= 1 {
        return false;
    }

    let mut power = base;
    while power < n {
        match power.checked_mul(base) {
            Some(next) => power = next,
            None => return false,
        }
    }
    power == n
}
