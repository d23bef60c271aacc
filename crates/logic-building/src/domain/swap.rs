//! Swapping two values
//!
//! `swap_demo_lines` is a print demonstration: it returns the transcript
//! instead of printing so callers decide where the lines go.

/// Swap through a temporary variable
#[allow(clippy::manual_swap)]
pub fn swap_with_temp(a: i64, b: i64) -> (i64, i64) {
    let mut a = a;
    let mut b = b;
    let temp = a;
    a = b;
    b = temp;
    (a, b)
}

/// Swap with tuple destructuring
pub fn swap_with_tuple(a: i64, b: i64) -> (i64, i64) {
    let (a, b) = (b, a);
    (a, b)
}

/// Transcript of the swap demonstration
pub fn swap_demo_lines(a: i64, b: i64) -> Vec<String> {
    let before = format!("Before swap: a = {}, b = {}", a, b);
    let (a, b) = swap_with_temp(a, b);
    let after = format!("After swap: a = {}, b = {}", a, b);
    vec![before, after]
}
