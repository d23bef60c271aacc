//! Ascending-order checks

/// Sortedness check by sorting a copy and comparing it with the input
pub fn is_sorted_by_sorting(values: &[i64]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted == values
}

/// Sortedness check by scanning adjacent pairs for a descent
pub fn is_sorted_adjacent(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_examples() {
        let sorted = [10, 20, 30, 40, 50];
        let unsorted = [10, 20, 30, 5, 6];

        assert!(is_sorted_by_sorting(&sorted));
        assert!(is_sorted_adjacent(&sorted));
        assert!(!is_sorted_by_sorting(&unsorted));
        assert!(!is_sorted_adjacent(&unsorted));
    }

    #[test]
    fn test_trivial_inputs() {
        for values in [&[][..], &[42][..], &[3, 3, 3][..]] {
            assert!(is_sorted_by_sorting(values));
            assert!(is_sorted_adjacent(values));
        }
    }

    #[test]
    fn test_single_descent_at_end() {
        let values = [1, 2, 3, 4, 3];
        assert!(!is_sorted_by_sorting(&values));
        assert!(!is_sorted_adjacent(&values));
    }
}
