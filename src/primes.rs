//! Prime sizing for bucket arrays

/// Returns true if `n` is prime.
///
/// Plain trial division by odd numbers up to the square root of `n`. It only runs
/// when a table is built or rehashed.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || is_even(n) {
        return false;
    }

    let mut divisor: usize = 3;
    while divisor.saturating_mul(divisor) <= n {
        if n.checked_rem(divisor) == Some(0) {
            return false;
        }
        divisor = divisor.saturating_add(2);
    }

    true
}

/// Returns the smallest prime at least as large as `n`, searching odd candidates only.
///
/// An even `n` is bumped to `n + 1` before the search starts, so the result is
/// always odd and `next_prime(2)` is 3.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if is_even(n) { n.saturating_add(1) } else { n };

    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }

    candidate
}

/// Returns true if `n` is divisible by two
fn is_even(n: usize) -> bool {
    n & 1 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_numbers() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(101));
        assert!(is_prime(211));
        assert!(!is_prime(221)); // 13 * 17
    }

    #[test]
    fn test_is_prime_matches_naive_check() {
        for n in 0..2_000_usize {
            let naive = n >= 2 && (2..n).all(|d| n % d != 0);
            assert_eq!(is_prime(n), naive, "mismatch for {n}");
        }
    }

    #[test]
    fn test_next_prime_small_inputs() {
        assert_eq!(next_prime(0), 3);
        assert_eq!(next_prime(1), 3);
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(3), 3);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(8), 11);
    }

    #[test]
    fn test_next_prime_table_sizes() {
        assert_eq!(next_prime(101), 101);
        assert_eq!(next_prime(202), 211);
        assert_eq!(next_prime(422), 431);
        assert_eq!(next_prime(100), 101);
    }

    #[test]
    fn test_next_prime_is_prime_and_not_smaller() {
        for n in 0..1_000_usize {
            let p = next_prime(n);
            assert!(is_prime(p));
            assert!(p >= n);
        }
    }
}
