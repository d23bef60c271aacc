//! Greatest common divisor and least common multiple
//!
//! Three GCD techniques and two LCM techniques. Zero operands short-circuit
//! so the subtractive and scanning forms always terminate.

/// GCD by repeated subtraction of the smaller value from the larger
pub fn gcd_subtractive(a: u64, b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let (mut a, mut b) = (a, b);
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    a
}

/// GCD by the remainder-based Euclidean algorithm
pub fn gcd_euclid(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd_euclid(b, a % b) }
}

/// GCD by scanning candidates downward from the smaller operand
pub fn gcd_brute_force(a: u64, b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    (1..=a.min(b))
        .rev()
        .find(|d| a % d == 0 && b % d == 0)
        .unwrap_or(1)
}

/// LCM derived from the GCD: `a / gcd(a, b) * b`
///
/// Dividing first keeps the intermediate value no larger than the result,
/// so the answer is exact whenever the LCM fits in `u64`. Past that the
/// product wraps.
pub fn lcm_from_gcd(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd_euclid(a, b)).wrapping_mul(b)
}

/// LCM by scanning multiples of the larger operand
///
/// Exact whenever the LCM fits in `u64`. Returns 0 when the next multiple
/// would overflow before a common one is found.
pub fn lcm_brute_force(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }

    let (small, large) = (a.min(b), a.max(b));
    let mut candidate = large;
    while candidate % small != 0 {
        match candidate.checked_add(large) {
            Some(next) => candidate = next,
            None => return 0,
        }
    }
    candidate
}
