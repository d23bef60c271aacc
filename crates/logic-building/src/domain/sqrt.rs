//! Integer floor square root
//!
//! Four techniques: linear scan, binary search, the float `sqrt` built-in,
//! and the identity `sqrt(n) = exp(ln(n) / 2)` followed by a correction step.

/// Floor square root by scanning upward until `i * i` passes `n`
pub fn floor_sqrt_linear(n: u64) -> u64 {
    let n = u128::from(n);
    let mut i: u128 = 1;
    while i * i <= n {
        i += 1;
    }
    (i - 1) as u64
}

/// Floor square root by binary search over `[0, n]`
pub fn floor_sqrt_binary_search(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    let target = u128::from(n);
    let (mut low, mut high) = (1u64, n);
    let mut answer = 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        let square = u128::from(mid) * u128::from(mid);
        if square == target {
            return mid;
        }
        if square < target {
            answer = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    answer
}

/// Floor square root with the float built-in
///
/// Near the top of the `u64` range `n as f64` rounds, so the result can be
/// off by one there.
pub fn floor_sqrt_builtin(n: u64) -> u64 {
    (n as f64).sqrt().floor() as u64
}

/// Floor square root from `exp(0.5 * ln n)` with a one-step correction
///
/// The float estimate may land one below an exact root or one above it, so
/// the candidate is moved until `x^2 <= n < (x + 1)^2`.
pub fn floor_sqrt_exp_log(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    let target = u128::from(n);
    let mut x = u128::from((0.5 * (n as f64).ln()).exp().floor() as u64);
    if x * x > target {
        x -= 1;
    }
    if (x + 1) * (x + 1) <= target {
        x += 1;
    }
    x as u64
}
