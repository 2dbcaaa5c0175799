// src/integer_math/sieve.rs
//
// Primality by sieve of Eratosthenes.
//
// The sieve runs all the way up to the queried value, so its cost scales with
// the value itself (O(n log log n) time, O(n) bits). Every query is therefore
// checked against an explicit upper bound before anything is allocated.

use bitvec::prelude::*;
use log::debug;
use rayon::prelude::*;

use crate::config::SieveConfig;
use crate::error::{CalcError, Result};

/// Largest value accepted when no bound is configured.
pub const DEFAULT_MAX_VALUE: u64 = 10_000_000;

/// Hard ceiling on any configured bound (one marker bit per value, ~125 MB).
pub const SIEVE_CEILING: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimalityChecker {
    max_value: u64,
}

impl Default for PrimalityChecker {
    fn default() -> Self {
        PrimalityChecker::new(DEFAULT_MAX_VALUE)
    }
}

impl From<&SieveConfig> for PrimalityChecker {
    fn from(config: &SieveConfig) -> Self {
        PrimalityChecker::new(config.max_value)
    }
}

impl PrimalityChecker {
    /// Bounds above `SIEVE_CEILING` are clamped to it.
    pub fn new(max_value: u64) -> Self {
        PrimalityChecker { max_value: max_value.min(SIEVE_CEILING) }
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Returns true when `n` survives the sieve.
    ///
    /// # Examples
    /// ```
    /// use calcs::integer_math::sieve::PrimalityChecker;
    ///
    /// let checker = PrimalityChecker::default();
    /// assert!(checker.is_prime(17).unwrap());
    /// assert!(!checker.is_prime(18).unwrap());
    /// ```
    pub fn is_prime(&self, n: u64) -> Result<bool> {
        let primes = self.primes_up_to(n)?;
        Ok(primes.last() == Some(&n))
    }

    /// All primes in `[2, n]`, in ascending order.
    pub fn primes_up_to(&self, n: u64) -> Result<Vec<u64>> {
        if n > self.max_value {
            return Err(CalcError::InputTooLarge { value: n, max: self.max_value });
        }
        let too_large = || CalcError::InputTooLarge { value: n, max: self.max_value };
        let limit = usize::try_from(n).map_err(|_| too_large())?;
        let len = limit.checked_add(1).ok_or_else(too_large)?;

        // 0 and 1 never enter the loop below, so the marker array is only
        // indexed when it holds at least three entries.
        let mut markers = bitvec![1; len];
        let mut primes = Vec::new();

        for i in 2..=limit {
            if !markers[i] {
                continue;
            }
            primes.push(i as u64);

            let Some(mut j) = i.checked_mul(i) else {
                continue;
            };
            while j <= limit {
                markers.set(j, false);
                j += i;
            }
        }

        debug!("Sieve up to {} recorded {} primes", n, primes.len());
        Ok(primes)
    }

    /// Checks every value independently; results keep the input order.
    pub fn check_many(&self, values: &[u64]) -> Result<Vec<bool>> {
        values.par_iter().map(|&n| self.is_prime(n)).collect()
    }
}

/// Sieve primality test with the default bound.
pub fn is_prime(n: u64) -> Result<bool> {
    PrimalityChecker::default().is_prime(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_values_are_not_prime() {
        let checker = PrimalityChecker::default();
        assert!(!checker.is_prime(0).unwrap());
        assert!(!checker.is_prime(1).unwrap());
    }

    #[test]
    fn test_small_values() {
        let checker = PrimalityChecker::default();
        assert!(checker.is_prime(2).unwrap());
        assert!(checker.is_prime(3).unwrap());
        assert!(!checker.is_prime(4).unwrap());
        assert!(checker.is_prime(17).unwrap());
        assert!(!checker.is_prime(18).unwrap());
    }

    #[test]
    fn test_primes_up_to_thirty() {
        let primes = PrimalityChecker::default().primes_up_to(30).unwrap();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_primes_up_to_one_is_empty() {
        assert!(PrimalityChecker::default().primes_up_to(1).unwrap().is_empty());
        assert!(PrimalityChecker::default().primes_up_to(0).unwrap().is_empty());
    }

    #[test]
    fn test_bound_is_inclusive() {
        let checker = PrimalityChecker::new(97);
        assert!(checker.is_prime(97).unwrap());
        match checker.is_prime(98) {
            Err(CalcError::InputTooLarge { value, max }) => {
                assert_eq!(value, 98);
                assert_eq!(max, 97);
            }
            other => panic!("expected InputTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_bound_is_clamped_to_ceiling() {
        let checker = PrimalityChecker::new(u64::MAX);
        assert_eq!(checker.max_value(), SIEVE_CEILING);
        match checker.is_prime(u64::MAX) {
            Err(CalcError::InputTooLarge { value, max }) => {
                assert_eq!(value, u64::MAX);
                assert_eq!(max, SIEVE_CEILING);
            }
            other => panic!("expected InputTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_config_bound_is_clamped() {
        let checker = PrimalityChecker::from(&SieveConfig { max_value: u64::MAX });
        assert_eq!(checker.max_value(), SIEVE_CEILING);
        assert!(checker.is_prime(SIEVE_CEILING + 1).is_err());
    }

    #[test]
    fn test_check_many_keeps_order() {
        let checker = PrimalityChecker::default();
        let results = checker.check_many(&[18, 17, 1, 2, 91, 97]).unwrap();
        assert_eq!(results, vec![false, true, false, true, false, true]);
    }

    #[test]
    fn test_check_many_fails_on_any_oversized_value() {
        let checker = PrimalityChecker::new(100);
        assert!(checker.check_many(&[7, 1_000, 11]).is_err());
    }
}
