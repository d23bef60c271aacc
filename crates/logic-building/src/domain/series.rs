//! Sums of series, arithmetic progressions and triangular numbers
//!
//! The plain closed forms multiply before dividing and overflow `u64` well
//! before the true result does. The `_safe` forms divide a factor first so
//! the intermediate never exceeds the result.
//!
//! Closed forms use `wrapping_*` arithmetic: past their bound they return
//! the wrapped value in every build profile instead of panicking.

// =============================================================================
// Sum of the first n natural numbers
// =============================================================================

/// `1 + 2 + ... + n` with a loop
pub fn sum_of_naturals_loop(n: u64) -> u64 {
    let mut sum = 0;
    for i in 1..=n {
        sum += i;
    }
    sum
}

/// `n (n + 1) / 2`
///
/// Exact for `n <= u32::MAX`. Above that `n (n + 1)` wraps.
pub fn sum_of_naturals_formula(n: u64) -> u64 {
    n.wrapping_mul(n.wrapping_add(1)) / 2
}

/// `n (n + 1) / 2` with the even factor halved before multiplying
///
/// Exact whenever the sum itself fits in `u64` (`n <= 6_074_000_999`).
pub fn sum_of_naturals_formula_safe(n: u64) -> u64 {
    if n % 2 == 0 {
        (n / 2).wrapping_mul(n.wrapping_add(1))
    } else {
        n.wrapping_mul(n.wrapping_add(1) / 2)
    }
}

/// `n + sum(n - 1)` by direct recursion
pub fn sum_of_naturals_recursive(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        n + sum_of_naturals_recursive(n - 1)
    }
}

// =============================================================================
// Sum of squares of the first n natural numbers
// =============================================================================

/// `1^2 + 2^2 + ... + n^2` by direct summation
pub fn sum_of_squares_direct(n: u64) -> u64 {
    (1..=n).map(|i| i * i).sum()
}

/// `n (n + 1) (2n + 1) / 6`
///
/// Exact for `n <= 2_097_151`. Above that the triple product wraps.
pub fn sum_of_squares_formula(n: u64) -> u64 {
    n.wrapping_mul(n.wrapping_add(1))
        .wrapping_mul(n.wrapping_mul(2).wrapping_add(1))
        / 6
}

/// `n (n + 1) (2n + 1) / 6` with the 2 and the 3 divided out of the factors
///
/// One of `n`, `n + 1` is even and one of `n`, `n + 1`, `2n + 1` is a
/// multiple of 3, so both divisions are exact. Exact whenever the sum
/// itself fits in `u64`.
pub fn sum_of_squares_formula_safe(n: u64) -> u64 {
    let mut factors = [n, n.wrapping_add(1), n.wrapping_mul(2).wrapping_add(1)];

    if let Some(even) = factors[..2].iter_mut().find(|f| **f % 2 == 0) {
        *even /= 2;
    }
    if let Some(triple) = factors.iter_mut().find(|f| **f % 3 == 0) {
        *triple /= 3;
    }

    factors[0].wrapping_mul(factors[1]).wrapping_mul(factors[2])
}

// =============================================================================
// Arithmetic progression
// =============================================================================

/// nth term (1-based) of the progression `a, a + d, a + 2d, ...` with a loop
pub fn nth_ap_term_loop(a: i64, d: i64, n: u64) -> i64 {
    let mut term = a;
    for _ in 1..n {
        term += d;
    }
    term
}

/// nth term (1-based) with the closed form `a + (n - 1) d`
pub fn nth_ap_term_formula(a: i64, d: i64, n: u64) -> i64 {
    a + (n as i64 - 1) * d
}

// =============================================================================
// Triangular numbers
// =============================================================================

/// nth triangular number `n (n + 1) / 2`
///
/// Exact for `n <= u32::MAX`. Above that `n (n + 1)` wraps.
pub fn triangular_number_formula(n: u64) -> u64 {
    n.wrapping_mul(n.wrapping_add(1)) / 2
}

/// nth triangular number by stacking rows of 1, 2, ..., n
pub fn triangular_number_loop(n: u64) -> u64 {
    let mut total = 0;
    let mut row = 1;
    while row <= n {
        total += row;
        row += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_naturals_examples() {
        for (n, expected) in [(1, 1), (10, 55), (100, 5050), (1000, 500500)] {
            assert_eq!(sum_of_naturals_loop(n), expected);
            assert_eq!(sum_of_naturals_formula(n), expected);
            assert_eq!(sum_of_naturals_formula_safe(n), expected);
            assert_eq!(sum_of_naturals_recursive(n), expected);
        }
    }

    #[test]
    fn test_sum_of_naturals_safe_near_limit() {
        // n (n + 1) overflows here, the result does not
        let n = 5_000_000_000u64;
        assert_eq!(sum_of_naturals_formula_safe(n), 12_500_000_002_500_000_000);
    }

    #[test]
    fn test_sum_of_naturals_formula_bound() {
        // Largest n whose n (n + 1) fits in u64
        let n = u32::MAX as u64;
        assert_eq!(sum_of_naturals_formula(n), 9_223_372_034_707_292_160);
        assert_eq!(sum_of_naturals_formula(n), sum_of_naturals_formula_safe(n));
        assert_eq!(triangular_number_formula(n), sum_of_naturals_formula_safe(n));
    }

    #[test]
    fn test_sum_of_naturals_formula_wraps_past_bound() {
        let n = 5_000_000_000u64;
        assert_eq!(sum_of_naturals_formula(n), 3_276_627_965_645_224_192);
        assert_eq!(triangular_number_formula(n), 3_276_627_965_645_224_192);
        assert_ne!(sum_of_naturals_formula(n), sum_of_naturals_formula_safe(n));
    }

    #[test]
    fn test_closed_forms_do_not_panic_at_max() {
        let _ = sum_of_naturals_formula(u64::MAX);
        let _ = sum_of_naturals_formula_safe(u64::MAX);
        let _ = sum_of_squares_formula(u64::MAX);
        let _ = sum_of_squares_formula_safe(u64::MAX);
        let _ = triangular_number_formula(u64::MAX);
    }

    #[test]
    fn test_sum_of_squares_formula_bound() {
        // Largest n whose n (n + 1) (2n + 1) fits in u64
        let n = 2_097_151u64;
        assert_eq!(sum_of_squares_formula(n), 3_074_455_146_595_352_576);
        assert_eq!(sum_of_squares_formula_safe(n), 3_074_455_146_595_352_576);

        let past = n + 1;
        assert_eq!(sum_of_squares_formula(past), 2_199_023_605_077);
        assert_eq!(sum_of_squares_formula_safe(past), 3_074_459_544_641_863_680);

        let n = 2_500_000u64;
        assert_eq!(sum_of_squares_formula_safe(n), 5_208_336_458_333_750_000);
        assert_eq!(sum_of_squares_formula(n), 2_133_879_112_715_491_397);
    }

    #[test]
    fn test_sum_of_squares_examples() {
        for (n, expected) in [(1, 1), (5, 55), (10, 385), (100, 338350)] {
            assert_eq!(sum_of_squares_direct(n), expected);
            assert_eq!(sum_of_squares_formula(n), expected);
            assert_eq!(sum_of_squares_formula_safe(n), expected);
        }
    }

    #[test]
    fn test_sum_of_squares_safe_agrees() {
        for n in 0..500 {
            assert_eq!(sum_of_squares_formula_safe(n), sum_of_squares_direct(n));
        }
    }

    #[test]
    fn test_nth_ap_term() {
        for (a, d, n, expected) in [(2, 3, 4, 11), (5, 0, 10, 5), (10, -2, 6, 0), (1, 1, 1, 1)] {
            assert_eq!(nth_ap_term_loop(a, d, n), expected);
            assert_eq!(nth_ap_term_formula(a, d, n), expected);
        }
    }

    #[test]
    fn test_triangular_numbers() {
        for (n, expected) in [(0, 0), (1, 1), (4, 10), (7, 28)] {
            assert_eq!(triangular_number_formula(n), expected);
            assert_eq!(triangular_number_loop(n), expected);
        }
    }
}
