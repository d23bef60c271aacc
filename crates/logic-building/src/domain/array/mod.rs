//! Array problems
//!
//! - `sorted`: ascending-order checks
//! - `search`: combinatorial search over tuples of elements

pub mod search;
pub mod sorted;

pub use search::{
    distinct_quadruplets, four_sum_closest, has_four_sum, max_occurred_in_ranges,
    smallest_difference_triplet, three_sum_zero,
};
pub use sorted::{is_sorted_adjacent, is_sorted_by_sorting};
