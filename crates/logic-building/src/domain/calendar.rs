//! Day of the week

use crate::constants::{SAKAMOTO_MONTH_OFFSETS, WEEKDAY_NAMES};

/// Day of the week by Sakamoto's algorithm (0 = Sunday, 6 = Saturday)
///
/// January and February are treated as months of the previous year so the
/// leap day falls at the end of the counting year.
///
/// `month` is meant to be 1..=12. Other values index the offset table
/// cyclically (0 reads December's offset) and still count as January or
/// February when below 3, so the call never panics.
pub fn day_of_week(day: u32, month: u32, year: i32) -> u32 {
    let year = i64::from(year) - i64::from(month < 3);
    let offset = SAKAMOTO_MONTH_OFFSETS[((u64::from(month) + 11) % 12) as usize];
    let total = year + year / 4 - year / 100 + year / 400 + i64::from(offset) + i64::from(day);
    total.rem_euclid(7) as u32
}

/// English weekday name for a `day_of_week` result
pub fn weekday_name(index: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(index as usize).copied()
}
