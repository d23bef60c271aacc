//! Proper divisors and perfect numbers

/// Proper divisors of `n` in ascending order (every divisor except `n`)
pub fn proper_divisors(n: u64) -> Vec<u64> {
    (1..n).filter(|d| n % d == 0).collect()
}

/// Perfect number check: the proper divisors sum to `n` itself
pub fn is_perfect(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut sum = 0;
    for d in 1..n {
        if n % d == 0 {
            sum += d;
        }
    }
    sum == n
}
