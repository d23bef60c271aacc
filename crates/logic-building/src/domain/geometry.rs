//! Triangle validity and point distance

/// Check the strict triangle inequality for three side lengths
///
/// Each pair of sides must add up to more than the third. Degenerate
/// (flat) triangles are rejected.
pub fn is_valid_triangle(a: i64, b: i64, c: i64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_triangles() {
        assert!(is_valid_triangle(7, 10, 5));
        assert!(is_valid_triangle(3, 4, 5));
        assert!(is_valid_triangle(1, 1, 1));
    }

    #[test]
    fn test_invalid_triangles() {
        assert!(!is_valid_triangle(1, 10, 12));
        assert!(!is_valid_triangle(1, 2, 3));
        assert!(!is_valid_triangle(0, 0, 0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(3.0, 4.0, 3.0, 4.0), 0.0);
        assert!((distance(1.0, 1.0, 2.0, 2.0) - 2f64.sqrt()).abs() < 1e-12);
    }
}
