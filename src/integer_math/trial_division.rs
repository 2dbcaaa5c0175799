// src/integer_math/trial_division.rs
//
// Trial division: O(sqrt(n)) primality test that needs no allocation.
// Used as an independent oracle for the sieve.

use log::trace;
use num::integer::{Integer, Roots};

/// Smallest divisor of `n` in `[2, sqrt(n)]`, or `None` when `n` has none.
///
/// Values below 2 have no proper divisor and also return `None`.
///
/// # Examples
/// ```
/// use calcs::integer_math::trial_division::smallest_divisor;
///
/// assert_eq!(smallest_divisor(143), Some(11));
/// assert_eq!(smallest_divisor(97), None);
/// ```
pub fn smallest_divisor(n: u64) -> Option<u64> {
    if n < 4 {
        return None;
    }
    if Integer::is_even(&n) {
        return Some(2);
    }

    let bound = Roots::sqrt(&n);
    let mut divisor = 3u64;
    while divisor <= bound {
        if Integer::is_multiple_of(&n, &divisor) {
            trace!("Found divisor {} of {}", divisor, n);
            return Some(divisor);
        }
        divisor += 2;
    }

    None
}

/// Primality by trial division; `n < 2` is never prime.
pub fn is_prime_by_trial_division(n: u64) -> bool {
    n >= 2 && smallest_divisor(n).is_none()
}
