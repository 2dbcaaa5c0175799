// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod integer_math;
pub mod polynomial;
pub mod report;

pub use error::{CalcError, Result};
pub use integer_math::sieve::{is_prime, PrimalityChecker};
pub use polynomial::cubic::solve_cubic;
pub use polynomial::quintic::{solve_quintic, NewtonOptions, QuinticEquation};
