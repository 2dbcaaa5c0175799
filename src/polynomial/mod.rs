// src/polynomial/mod.rs

pub mod coefficients;
pub mod cubic;
pub mod quintic;

pub use coefficients::PolynomialCoefficients;
pub use cubic::solve_cubic;
pub use quintic::{solve_quintic, NewtonOptions, QuinticEquation};
