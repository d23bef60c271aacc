//! Combinatorial search over tuples of array elements
//!
//! Results that list tuples are built from a sorted copy of the input, so
//! every tuple is ascending and the list is in lexicographic order.

use rustc_hash::FxHashMap;

/// All distinct triplets whose sum is zero
pub fn three_sum_zero(values: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let mut triplets = Vec::new();

    for i in 0..n.saturating_sub(2) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let (mut low, mut high) = (i + 1, n - 1);
        while low < high {
            let sum = sorted[i] + sorted[low] + sorted[high];
            if sum < 0 {
                low += 1;
            } else if sum > 0 {
                high -= 1;
            } else {
                triplets.push([sorted[i], sorted[low], sorted[high]]);
                low += 1;
                high -= 1;
                while low < high && sorted[low] == sorted[low - 1] {
                    low += 1;
                }
                while low < high && sorted[high] == sorted[high + 1] {
                    high -= 1;
                }
            }
        }
    }

    triplets
}

/// Check whether four elements at distinct positions sum to `target`
///
/// Every pair sum is indexed in a hash map. A quadruplet exists when some
/// pair finds a complementary pair that shares none of its positions.
pub fn has_four_sum(values: &[i64], target: i64) -> bool {
    let n = values.len();
    if n < 4 {
        return false;
    }

    let mut pair_sums: FxHashMap<i64, Vec<(usize, usize)>> = FxHashMap::default();
    for i in 0..n {
        for j in i + 1..n {
            pair_sums.entry(values[i] + values[j]).or_default().push((i, j));
        }
    }

    for i in 0..n {
        for j in i + 1..n {
            let Some(candidates) = pair_sums.get(&(target - values[i] - values[j])) else {
                continue;
            };
            let disjoint = candidates
                .iter()
                .any(|&(k, l)| k != i && k != j && l != i && l != j);
            if disjoint {
                return true;
            }
        }
    }

    false
}

/// All distinct value-quadruplets whose sum is `target`
pub fn distinct_quadruplets(values: &[i64], target: i64) -> Vec<[i64; 4]> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let mut quadruplets = Vec::new();

    for i in 0..n.saturating_sub(3) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        for j in i + 1..n - 2 {
            if j > i + 1 && sorted[j] == sorted[j - 1] {
                continue;
            }
            let (mut low, mut high) = (j + 1, n - 1);
            while low < high {
                let sum = sorted[i] + sorted[j] + sorted[low] + sorted[high];
                if sum < target {
                    low += 1;
                } else if sum > target {
                    high -= 1;
                } else {
                    quadruplets.push([sorted[i], sorted[j], sorted[low], sorted[high]]);
                    low += 1;
                    high -= 1;
                    while low < high && sorted[low] == sorted[low - 1] {
                        low += 1;
                    }
                    while low < high && sorted[high] == sorted[high + 1] {
                        high -= 1;
                    }
                }
            }
        }
    }

    quadruplets
}

/// Sum of the quadruplet closest to `target`
///
/// When two sums are equally close the smaller one wins. Returns `None` for
/// fewer than four elements.
pub fn four_sum_closest(values: &[i64], target: i64) -> Option<i64> {
    let n = values.len();
    if n < 4 {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mut best = sorted[0] + sorted[1] + sorted[2] + sorted[3];

    for i in 0..n - 3 {
        for j in i + 1..n - 2 {
            let (mut low, mut high) = (j + 1, n - 1);
            while low < high {
                let sum = sorted[i] + sorted[j] + sorted[low] + sorted[high];
                let (gap, best_gap) = ((sum - target).abs(), (best - target).abs());
                if gap < best_gap || (gap == best_gap && sum < best) {
                    best = sum;
                }
                if sum == target {
                    return Some(sum);
                }
                if sum < target {
                    low += 1;
                } else {
                    high -= 1;
                }
            }
        }
    }

    Some(best)
}

/// Triplet with one element from each array minimising `max - min`
///
/// Ties on the difference are broken by the smaller element sum. The
/// triplet is returned in descending order. Returns `None` when any array
/// is empty.
pub fn smallest_difference_triplet(a: &[i64], b: &[i64], c: &[i64]) -> Option<[i64; 3]> {
    if a.is_empty() || b.is_empty() || c.is_empty() {
        return None;
    }

    let mut arrays = [a.to_vec(), b.to_vec(), c.to_vec()];
    for array in arrays.iter_mut() {
        array.sort_unstable();
    }

    let mut cursor = [0usize; 3];
    let mut best: Option<([i64; 3], i64, i64)> = None;

    loop {
        let current = [
            arrays[0][cursor[0]],
            arrays[1][cursor[1]],
            arrays[2][cursor[2]],
        ];
        let mut triplet = current;
        triplet.sort_unstable_by(|x, y| y.cmp(x));
        let diff = triplet[0] - triplet[2];
        let sum = triplet.iter().sum::<i64>();

        let improves = match best {
            None => true,
            Some((_, best_diff, best_sum)) => {
                diff < best_diff || (diff == best_diff && sum < best_sum)
            }
        };
        if improves {
            best = Some((triplet, diff, sum));
        }

        // Advance the array holding the current minimum
        let min_index = (0..3).min_by_key(|&k| current[k]).unwrap_or(0);
        cursor[min_index] += 1;
        if cursor[min_index] == arrays[min_index].len() {
            break;
        }
    }

    best.map(|(triplet, _, _)| triplet)
}

/// Integer covered by the most ranges `[left[i], right[i]]`
///
/// Ranges are inclusive and paired by index; extra entries in the longer
/// slice are ignored, as are ranges with `left > right`. Ties go to the
/// smallest integer. Returns `None` when there are no ranges.
///
/// Sweeps sorted range endpoints, so cost depends on the number of ranges
/// and not on how large the endpoints are.
pub fn max_occurred_in_ranges(left: &[usize], right: &[usize]) -> Option<usize> {
    if left.is_empty() || right.is_empty() {
        return None;
    }

    // (position, change in coverage); a range ending at usize::MAX never closes
    let mut events: Vec<(usize, i64)> = Vec::with_capacity(left.len() * 2);
    for (&l, &r) in left.iter().zip(right) {
        if l > r {
            continue;
        }
        events.push((l, 1));
        if let Some(end) = r.checked_add(1) {
            events.push((end, -1));
        }
    }
    events.sort_unstable();

    let mut best_value = 0;
    let mut best_count = 0;
    let mut running = 0;
    let mut i = 0;
    while i < events.len() {
        let position = events[i].0;
        while i < events.len() && events[i].0 == position {
            running += events[i].1;
            i += 1;
        }
        if running > best_count {
            best_count = running;
            best_value = position;
        }
    }

    Some(best_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_sum_zero() {
        let values = [-1, 0, 1, 2, -1, -4];
        assert_eq!(three_sum_zero(&values), vec![[-1, -1, 2], [-1, 0, 1]]);
    }

    #[test]
    fn test_three_sum_zero_duplicates_collapse() {
        assert_eq!(three_sum_zero(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
        assert!(three_sum_zero(&[1, 2]).is_empty());
    }

    #[test]
    fn test_has_four_sum() {
        let values = [10, 2, 3, 4, 5, 9, 7, 8];
        assert!(has_four_sum(&values, 23));
        assert!(!has_four_sum(&values, 100));
        assert!(!has_four_sum(&[1, 2, 3], 6));
    }

    #[test]
    fn test_has_four_sum_needs_distinct_positions() {
        // 1 + 1 + 1 + 1 would need the same element four times
        assert!(!has_four_sum(&[1, 2, 3, 5], 4));
        assert!(has_four_sum(&[1, 1, 1, 1], 4));
    }

    #[test]
    fn test_distinct_quadruplets() {
        let values = [1, 0, -1, 0, -2, 2];
        assert_eq!(
            distinct_quadruplets(&values, 0),
            vec![[-2, -1, 1, 2], [-2, 0, 0, 2], [-1, 0, 0, 1]]
        );
    }

    #[test]
    fn test_distinct_quadruplets_repeated_values() {
        assert_eq!(distinct_quadruplets(&[2, 2, 2, 2, 2], 8), vec![[2, 2, 2, 2]]);
        assert!(distinct_quadruplets(&[1, 2, 3], 6).is_empty());
    }

    #[test]
    fn test_four_sum_closest() {
        assert_eq!(four_sum_closest(&[1, 2, 3, 4, -5], 2), Some(2));
        assert_eq!(four_sum_closest(&[1, 2, 3, 4, 5], 100), Some(14));
        assert_eq!(four_sum_closest(&[1, 2, 3], 6), None);
    }

    #[test]
    fn test_four_sum_closest_tie_prefers_smaller() {
        // Sums 10 and 12 are both 1 away from 11
        assert_eq!(four_sum_closest(&[1, 2, 3, 4, 6], 11), Some(10));
    }

    #[test]
    fn test_smallest_difference_triplet() {
        let a = [5, 2, 8];
        let b = [10, 7, 12];
        let c = [9, 14, 6];
        assert_eq!(smallest_difference_triplet(&a, &b, &c), Some([7, 6, 5]));
    }

    #[test]
    fn test_smallest_difference_triplet_tie_on_sum() {
        let a = [15, 12, 18, 9];
        let b = [10, 17, 13, 8];
        let c = [14, 16, 11, 5];
        assert_eq!(smallest_difference_triplet(&a, &b, &c), Some([11, 10, 9]));
        assert_eq!(smallest_difference_triplet(&[], &b, &c), None);
    }

    #[test]
    fn test_max_occurred_in_ranges() {
        let left = [1, 4, 3, 1];
        let right = [15, 8, 5, 4];
        assert_eq!(max_occurred_in_ranges(&left, &right), Some(4));
    }

    #[test]
    fn test_max_occurred_in_ranges_tie_prefers_smallest() {
        assert_eq!(max_occurred_in_ranges(&[1, 5], &[3, 7]), Some(1));
        assert_eq!(max_occurred_in_ranges(&[], &[]), None);
    }

    #[test]
    fn test_max_occurred_in_ranges_near_usize_max() {
        let left = [usize::MAX - 1, 3];
        let right = [usize::MAX, 5];
        assert_eq!(max_occurred_in_ranges(&left, &right), Some(3));

        assert_eq!(max_occurred_in_ranges(&[usize::MAX], &[usize::MAX]), Some(usize::MAX));
        assert_eq!(
            max_occurred_in_ranges(&[0, usize::MAX - 1], &[usize::MAX, usize::MAX]),
            Some(usize::MAX - 1)
        );
    }

    #[test]
    fn test_max_occurred_in_ranges_matches_counting() {
        let left = [2, 0, 7, 3, 5, 9, 4];
        let right = [6, 3, 9, 3, 8, 1, 4];
        let counts: Vec<usize> = (0..12)
            .map(|x| left.iter().zip(&right).filter(|&(&l, &r)| l <= x && x <= r).count())
            .collect();
        let peak = counts.iter().copied().max().unwrap();
        let expected = counts.iter().position(|&c| c == peak).unwrap();

        assert_eq!(max_occurred_in_ranges(&left, &right), Some(expected));
    }

    #[test]
    fn test_max_occurred_in_ranges_skips_reversed() {
        assert_eq!(max_occurred_in_ranges(&[9, 2], &[1, 4]), Some(2));
        assert_eq!(max_occurred_in_ranges(&[9], &[1]), Some(0));
    }
}
