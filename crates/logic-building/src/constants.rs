//! Literal tables and defaults shared by the algorithm units

// =============================================================================
// Calendar
// =============================================================================

/// Month offsets used by Sakamoto's day-of-week algorithm (January first)
pub const SAKAMOTO_MONTH_OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Weekday names indexed by the Sakamoto result (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// =============================================================================
// Print demonstrations
// =============================================================================

/// Number of rows printed by the multiplication table when no bound is given
pub const DEFAULT_TABLE_ROWS: u32 = 10;

// =============================================================================
// Verification
// =============================================================================

/// Absolute tolerance when comparing float-derived results against integers
pub const FLOAT_TOLERANCE: f64 = 1e-6;
