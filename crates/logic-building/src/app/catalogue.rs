//! Catalogue of algorithm units and their literal examples
//!
//! Every public technique in the domain layer has an entry here. An entry
//! pairs the unit with its Self-Check Block: literal inputs and the exact
//! output expected for each.

use crate::constants::FLOAT_TOLERANCE;
use crate::domain::{
    array, binary, calendar, combinatorics, digits, divisibility, divisors, gcd, geometry,
    palindrome, parity, power, prime, series, sqrt, swap, table,
};
use crate::error::{CheckFailure, LogicError};
use num_bigint::BigUint;
use std::fmt::Debug;

/// One algorithm unit with its self-check
#[derive(Clone, Copy, Debug)]
pub struct Unit {
    /// Problem family the unit belongs to
    pub family: &'static str,
    /// Unit name, identical to the domain function name
    pub name: &'static str,
    /// Runs the literal examples, stopping at the first mismatch
    pub check: fn() -> Result<(), CheckFailure>,
}

impl Unit {
    /// `family::name`
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.family, self.name)
    }
}

/// Compare one example result against its expected value
fn expect<T: PartialEq + Debug>(
    unit: &'static str,
    input: String,
    actual: T,
    expected: T,
) -> Result<(), CheckFailure> {
    if actual == expected {
        Ok(())
    } else {
        Err(CheckFailure {
            unit,
            input,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Compare a float-derived result against an integer within tolerance
fn expect_close(
    unit: &'static str,
    input: String,
    actual: f64,
    expected: u64,
) -> Result<(), CheckFailure> {
    let target = expected as f64;
    if (actual - target).abs() <= FLOAT_TOLERANCE * target.max(1.0) {
        Ok(())
    } else {
        Err(CheckFailure {
            unit,
            input,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

/// Build a `Unit` from a function and a list of `(inputs) => expected` examples
macro_rules! unit {
    ($family:expr, $name:literal, $func:expr, [$(($($arg:expr),*) => $expected:expr),+ $(,)?]) => {
        Unit {
            family: $family,
            name: $name,
            check: || {
                $(
                    expect(
                        $name,
                        [$(format!("{:?}", $arg)),*].join(", "),
                        ($func)($($arg),*),
                        $expected,
                    )?;
                )+
                Ok(())
            },
        }
    };
}

/// Every unit in the crate, grouped by family in a fixed order
pub fn catalogue() -> Vec<Unit> {
    let mut units = Vec::new();
    units.extend(number_units());
    units.extend(combinatorics_units());
    units.extend(series_units());
    units.extend(digit_string_units());
    units.extend(array_units());
    units.extend(demonstration_units());
    units
}

fn number_units() -> Vec<Unit> {
    vec![
        unit!("parity", "is_even_remainder", parity::is_even_remainder, [
            (4) => true, (7) => false, (0) => true, (-6) => true,
        ]),
        unit!("parity", "is_even_bitwise", parity::is_even_bitwise, [
            (4) => true, (7) => false, (0) => true, (-6) => true,
        ]),
        unit!("parity", "is_even_shift", parity::is_even_shift, [
            (4) => true, (7) => false, (0) => true, (-6) => true,
        ]),
        unit!("gcd", "gcd_subtractive", gcd::gcd_subtractive, [
            (20, 28) => 4, (98, 56) => 14, (17, 5) => 1,
        ]),
        unit!("gcd", "gcd_euclid", gcd::gcd_euclid, [
            (20, 28) => 4, (98, 56) => 14, (17, 5) => 1,
        ]),
        unit!("gcd", "gcd_brute_force", gcd::gcd_brute_force, [
            (20, 28) => 4, (98, 56) => 14, (17, 5) => 1,
        ]),
        unit!("lcm", "lcm_from_gcd", gcd::lcm_from_gcd, [
            (4, 6) => 12, (15, 20) => 60, (7, 3) => 21,
        ]),
        unit!("lcm", "lcm_brute_force", gcd::lcm_brute_force, [
            (4, 6) => 12, (15, 20) => 60, (7, 3) => 21,
        ]),
        unit!("power", "is_power_of_log", power::is_power_of_log, [
            (2, 8) => true, (2, 1024) => true, (2, 10) => false,
        ]),
        unit!("power", "is_power_of_multiplication", power::is_power_of_multiplication, [
            (2, 8) => true, (3, 27) => true, (2, 10) => false,
        ]),
        unit!("binary", "dec_to_bin_division", binary::dec_to_bin_division, [
            (12) => "1100".to_string(), (0) => "0".to_string(), (5) => "101".to_string(),
        ]),
        unit!("binary", "dec_to_bin_bitwise", binary::dec_to_bin_bitwise, [
            (12) => "1100".to_string(), (0) => "0".to_string(), (5) => "101".to_string(),
        ]),
        unit!("binary", "dec_to_bin_builtin", binary::dec_to_bin_builtin, [
            (12) => "1100".to_string(), (0) => "0".to_string(), (5) => "101".to_string(),
        ]),
        unit!("digits", "sum_of_digits_iterative", digits::sum_of_digits_iterative, [
            (687) => 21, (12345) => 15, (0) => 0,
        ]),
        unit!("digits", "sum_of_digits_recursive", digits::sum_of_digits_recursive, [
            (687) => 21, (12345) => 15, (0) => 0,
        ]),
        unit!("digital_root", "digital_root_repeated", digits::digital_root_repeated, [
            (65785412) => Ok(2),
            (0) => Ok(0),
            (-7) => Err(LogicError::NegativeInput { value: -7 }),
        ]),
        unit!("digital_root", "digital_root_formula", digits::digital_root_formula, [
            (65785412) => Ok(2),
            (0) => Ok(0),
            (-7) => Err(LogicError::NegativeInput { value: -7 }),
        ]),
        unit!("palindrome", "is_palindrome_reversal", palindrome::is_palindrome_reversal, [
            (12321) => Ok(true),
            (1232) => Ok(false),
            (-121) => Err(LogicError::NegativeInput { value: -121 }),
        ]),
        unit!("palindrome", "is_palindrome_string", palindrome::is_palindrome_string, [
            (12321) => Ok(true),
            (1232) => Ok(false),
            (-121) => Err(LogicError::NegativeInput { value: -121 }),
        ]),
        unit!("sqrt", "floor_sqrt_linear", sqrt::floor_sqrt_linear, [
            (11) => 3, (16) => 4, (0) => 0,
        ]),
        unit!("sqrt", "floor_sqrt_binary_search", sqrt::floor_sqrt_binary_search, [
            (11) => 3, (16) => 4, (0) => 0,
        ]),
        unit!("sqrt", "floor_sqrt_builtin", sqrt::floor_sqrt_builtin, [
            (11) => 3, (16) => 4, (0) => 0,
        ]),
        unit!("sqrt", "floor_sqrt_exp_log", sqrt::floor_sqrt_exp_log, [
            (11) => 3, (16) => 4, (0) => 0,
        ]),
        unit!("divisors", "proper_divisors", divisors::proper_divisors, [
            (12) => vec![1, 2, 3, 4, 6], (7) => vec![1],
        ]),
        unit!("divisors", "is_perfect", divisors::is_perfect, [
            (6) => true, (28) => true, (12) => false,
        ]),
        unit!("prime", "is_prime", prime::is_prime, [
            (2) => true, (4) => false, (1) => false, (97) => true,
        ]),
        unit!("calendar", "day_of_week", calendar::day_of_week, [
            (30, 8, 2010) => 1, (1, 1, 2000) => 6,
        ]),
        unit!("calendar", "weekday_name", calendar::weekday_name, [
            (1) => Some("Monday"), (7) => None,
        ]),
        unit!("geometry", "is_valid_triangle", geometry::is_valid_triangle, [
            (7, 10, 5) => true, (1, 10, 12) => false,
        ]),
        unit!("geometry", "distance", geometry::distance, [
            (0.0, 0.0, 3.0, 4.0) => 5.0,
        ]),
    ]
}

fn combinatorics_units() -> Vec<Unit> {
    vec![
        unit!("factorial", "factorial_iterative", combinatorics::factorial_iterative, [
            (5) => big(120), (0) => big(1),
        ]),
        unit!("factorial", "factorial_recursive", combinatorics::factorial_recursive, [
            (5) => big(120), (0) => big(1),
        ]),
        unit!("ncr", "ncr_multiplicative", combinatorics::ncr_multiplicative, [
            (5, 2) => big(10), (10, 3) => big(120),
        ]),
        Unit {
            family: "ncr",
            name: "ncr_logarithmic",
            check: || {
                for (n, r, expected) in [(5, 2, 10), (10, 3, 120)] {
                    expect_close(
                        "ncr_logarithmic",
                        format!("{}, {}", n, r),
                        combinatorics::ncr_logarithmic(n, r),
                        expected,
                    )?;
                }
                Ok(())
            },
        },
        unit!("ncr", "ncr_recursive", combinatorics::ncr_recursive, [
            (5, 2) => Ok(10),
            (10, 3) => Ok(120),
            (3, 5) => Err(LogicError::OutOfRange { n: 3, r: 5 }),
        ]),
        unit!("npr", "npr", combinatorics::npr, [
            (5, 2) => big(20), (10, 3) => big(720),
        ]),
    ]
}

fn series_units() -> Vec<Unit> {
    vec![
        unit!("sum_of_naturals", "sum_of_naturals_loop", series::sum_of_naturals_loop, [
            (10) => 55, (100) => 5050, (1000) => 500500,
        ]),
        unit!("sum_of_naturals", "sum_of_naturals_formula", series::sum_of_naturals_formula, [
            (10) => 55, (100) => 5050, (1000) => 500500,
        ]),
        unit!("sum_of_naturals", "sum_of_naturals_formula_safe", series::sum_of_naturals_formula_safe, [
            (10) => 55, (100) => 5050, (1000) => 500500,
        ]),
        unit!("sum_of_naturals", "sum_of_naturals_recursive", series::sum_of_naturals_recursive, [
            (10) => 55, (100) => 5050, (1000) => 500500,
        ]),
        unit!("sum_of_squares", "sum_of_squares_direct", series::sum_of_squares_direct, [
            (5) => 55, (10) => 385,
        ]),
        unit!("sum_of_squares", "sum_of_squares_formula", series::sum_of_squares_formula, [
            (5) => 55, (10) => 385,
        ]),
        unit!("sum_of_squares", "sum_of_squares_formula_safe", series::sum_of_squares_formula_safe, [
            (5) => 55, (10) => 385,
        ]),
        unit!("ap_term", "nth_ap_term_loop", series::nth_ap_term_loop, [
            (2, 3, 4) => 11, (5, 0, 10) => 5,
        ]),
        unit!("ap_term", "nth_ap_term_formula", series::nth_ap_term_formula, [
            (2, 3, 4) => 11, (5, 0, 10) => 5,
        ]),
        unit!("triangular", "triangular_number_formula", series::triangular_number_formula, [
            (4) => 10, (7) => 28,
        ]),
        unit!("triangular", "triangular_number_loop", series::triangular_number_loop, [
            (4) => 10, (7) => 28,
        ]),
    ]
}

fn digit_string_units() -> Vec<Unit> {
    vec![
        unit!("divisibility", "divisible_by_4_modulo", divisibility::divisible_by_4_modulo, [
            (1124) => true, (1234) => false,
        ]),
        unit!("divisibility", "divisible_by_4_last_two", divisibility::divisible_by_4_last_two, [
            ("1124") => true, ("1234") => false,
        ]),
        unit!("divisibility", "divisible_by_11_modulo", divisibility::divisible_by_11_modulo, [
            (76945) => true, (1234) => false,
        ]),
        unit!("divisibility", "divisible_by_11_alternating", divisibility::divisible_by_11_alternating, [
            ("76945") => true, ("1234") => false,
        ]),
        unit!("divisibility", "divisible_by_13_modulo", divisibility::divisible_by_13_modulo, [
            (2911285) => true, (2911286) => false,
        ]),
        unit!("divisibility", "divisible_by_13_running", divisibility::divisible_by_13_running, [
            ("2911285") => true, ("2911286") => false,
        ]),
    ]
}

fn array_units() -> Vec<Unit> {
    vec![
        unit!("sorted", "is_sorted_by_sorting", array::is_sorted_by_sorting, [
            (&[10, 20, 30, 40, 50]) => true, (&[10, 20, 30, 5, 6]) => false,
        ]),
        unit!("sorted", "is_sorted_adjacent", array::is_sorted_adjacent, [
            (&[10, 20, 30, 40, 50]) => true, (&[10, 20, 30, 5, 6]) => false,
        ]),
        unit!("search", "three_sum_zero", array::three_sum_zero, [
            (&[-1, 0, 1, 2, -1, -4]) => vec![[-1, -1, 2], [-1, 0, 1]],
        ]),
        unit!("search", "has_four_sum", array::has_four_sum, [
            (&[10, 2, 3, 4, 5, 9, 7, 8], 23) => true,
            (&[10, 2, 3, 4, 5, 9, 7, 8], 100) => false,
        ]),
        unit!("search", "distinct_quadruplets", array::distinct_quadruplets, [
            (&[1, 0, -1, 0, -2, 2], 0) => vec![[-2, -1, 1, 2], [-2, 0, 0, 2], [-1, 0, 0, 1]],
        ]),
        unit!("search", "four_sum_closest", array::four_sum_closest, [
            (&[1, 2, 3, 4, -5], 2) => Some(2), (&[1, 2, 3, 4, 6], 11) => Some(10),
        ]),
        unit!("search", "smallest_difference_triplet", array::smallest_difference_triplet, [
            (&[5, 2, 8], &[10, 7, 12], &[9, 14, 6]) => Some([7, 6, 5]),
        ]),
        unit!("search", "max_occurred_in_ranges", array::max_occurred_in_ranges, [
            (&[1, 4, 3, 1], &[15, 8, 5, 4]) => Some(4),
        ]),
    ]
}

fn demonstration_units() -> Vec<Unit> {
    vec![
        unit!("swap", "swap_with_temp", swap::swap_with_temp, [
            (10, 20) => (20, 10),
        ]),
        unit!("swap", "swap_with_tuple", swap::swap_with_tuple, [
            (10, 20) => (20, 10),
        ]),
        unit!("swap", "swap_demo_lines", swap::swap_demo_lines, [
            (10, 20) => lines(&["Before swap: a = 10, b = 20", "After swap: a = 20, b = 10"]),
        ]),
        unit!("table", "multiplication_table_iterative", table::multiplication_table_iterative, [
            (5, 3) => lines(&["5 x 1 = 5", "5 x 2 = 10", "5 x 3 = 15"]),
        ]),
        unit!("table", "multiplication_table_recursive", table::multiplication_table_recursive, [
            (5, 3) => lines(&["5 x 1 = 5", "5 x 2 = 10", "5 x 3 = 15"]),
        ]),
    ]
}

/// Distinct family names in catalogue order
pub fn families() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for unit in catalogue() {
        if !names.contains(&unit.family) {
            names.push(unit.family);
        }
    }
    names
}

/// Units matching an optional family and an optional unit name
pub fn find(family: Option<&str>, name: Option<&str>) -> Vec<Unit> {
    catalogue()
        .into_iter()
        .filter(|unit| family.is_none_or(|f| unit.family == f))
        .filter(|unit| name.is_none_or(|n| unit.name == n))
        .collect()
}
