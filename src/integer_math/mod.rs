// src/integer_math/mod.rs

pub mod sieve;
pub mod trial_division;

pub use sieve::{is_prime, PrimalityChecker};
