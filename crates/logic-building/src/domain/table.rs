//! Multiplication table print demonstration
//!
//! Both variants return the lines `"{n} x {i} = {n * i}"` for `i` in
//! `1..=upto`.

/// Multiplication table built with a loop
pub fn multiplication_table_iterative(n: i64, upto: u32) -> Vec<String> {
    (1..=upto)
        .map(|i| format!("{} x {} = {}", n, i, n * i64::from(i)))
        .collect()
}

/// Multiplication table built by recursing on the row number
pub fn multiplication_table_recursive(n: i64, upto: u32) -> Vec<String> {
    let mut lines = Vec::with_capacity(upto as usize);
    push_rows(n, 1, upto, &mut lines);
    lines
}

fn push_rows(n: i64, row: u32, upto: u32, lines: &mut Vec<String>) {
    if row > upto {
        return;
    }
    lines.push(format!("{} x {} = {}", n, row, n * i64::from(row)));
    push_rows(n, row + 1, upto, lines);
}
