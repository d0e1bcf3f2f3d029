//! Primality test used to maintain the prime ordering.

/// Returns `true` if `number` is prime.
///
/// Primality is sign-sensitive: every value less than or equal to `1`,
/// including all negative values, is reported as not prime.
///
/// # Complexity
///
/// O(sqrt(n)) trial division.
///
/// # Examples
///
/// ```rust
/// use magical_container::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(13));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(21));
/// ```
#[must_use]
pub const fn is_prime(number: i32) -> bool {
    if number <= 1 {
        return false;
    }
    if number < 4 {
        return true;
    }
    if number % 2 == 0 {
        return false;
    }

    // `divisor <= number / divisor` avoids overflowing `divisor * divisor` near i32::MAX.
    let mut divisor = 3;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
