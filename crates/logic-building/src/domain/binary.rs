//! Decimal to binary string conversion

/// Convert by repeated division by 2, collecting remainders
pub fn dec_to_bin_division(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut bits = Vec::new();
    let mut value = n;
    while value > 0 {
        bits.push(if value % 2 == 1 { '1' } else { '0' });
        value /= 2;
    }
    bits.iter().rev().collect()
}

/// Convert by shifting the value right and masking the lowest bit
pub fn dec_to_bin_bitwise(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let width = u64::BITS - n.leading_zeros();
    (0..width)
        .rev()
        .map(|shift| if (n >> shift) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Convert with the standard binary formatter
pub fn dec_to_bin_builtin(n: u64) -> String {
    format!("{:b}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dec_to_bin_examples() {
        for (n, expected) in [(0, "0"), (1, "1"), (2, "10"), (12, "1100"), (255, "11111111")] {
            assert_eq!(dec_to_bin_division(n), expected);
            assert_eq!(dec_to_bin_bitwise(n), expected);
            assert_eq!(dec_to_bin_builtin(n), expected);
        }
    }

    #[test]
    fn test_dec_to_bin_max() {
        let expected = "1".repeat(64);
        assert_eq!(dec_to_bin_division(u64::MAX), expected);
        assert_eq!(dec_to_bin_bitwise(u64::MAX), expected);
    }
}
