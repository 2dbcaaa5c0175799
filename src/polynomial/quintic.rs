// src/polynomial/quintic.rs
//
// Newton–Raphson for a·x⁵ + b·x⁴ + c·x³ + d·x² + e·x + f = 0.
//
// A single real root is returned per call. Failure to converge, either by
// hitting a near-flat derivative or by exhausting the iteration budget, is an
// ordinary outcome and comes back as `None`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::polynomial::coefficients::PolynomialCoefficients;

/// Newton iteration settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonOptions {
    /// Starting point of the iteration
    pub initial_guess: f64,

    /// Step size below which the iteration has converged; also the minimum
    /// accepted |f'(x)|
    pub tolerance: f64,

    /// Iteration budget
    pub max_iterations: usize,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        NewtonOptions {
            initial_guess: 0.0,
            tolerance: 1e-7,
            max_iterations: 1000,
        }
    }
}

/// Newton–Raphson on the raw coefficients `[a, b, c, d, e, f]`.
///
/// The caller must ensure `a != 0`; no validation happens here.
///
/// # Examples
/// ```
/// use calcs::polynomial::quintic::{solve_quintic, NewtonOptions};
///
/// let root = solve_quintic(&[1.0, 2.0, 10.0, 1.0, 1.0, 1.0], &NewtonOptions::default());
/// assert!(root.is_some());
/// ```
pub fn solve_quintic(coefficients: &[f64; 6], options: &NewtonOptions) -> Option<f64> {
    let [a, b, c, d, e, f] = *coefficients;
    let fx = |x: f64| a * x.powi(5) + b * x.powi(4) + c * x.powi(3) + d * x.powi(2) + e * x + f;
    let fx_prime =
        |x: f64| 5.0 * a * x.powi(4) + 4.0 * b * x.powi(3) + 3.0 * c * x.powi(2) + 2.0 * d * x + e;

    newton_raphson(fx, fx_prime, options)
}

/// Generic Newton–Raphson driver.
pub fn newton_raphson<F, D>(fx: F, fx_prime: D, options: &NewtonOptions) -> Option<f64>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = options.initial_guess;

    for iteration in 0..options.max_iterations {
        let y = fx(x);
        let y_prime = fx_prime(x);

        if y_prime.abs() < options.tolerance {
            debug!("Derivative {} too flat at x = {} (iteration {})", y_prime, x, iteration);
            return None;
        }

        let x_new = x - y / y_prime;
        trace!("Iteration {}: x = {} -> {}", iteration, x, x_new);

        if (x_new - x).abs() < options.tolerance {
            debug!("Converged to {} after {} iterations", x_new, iteration + 1);
            return Some(x_new);
        }

        x = x_new;
    }

    debug!("No convergence within {} iterations", options.max_iterations);
    None
}

/// Validated quintic equation; the leading coefficient is never zero.
#[derive(Clone, Debug, PartialEq)]
pub struct QuinticEquation {
    coefficients: [f64; 6],
    poly: PolynomialCoefficients,
}

impl QuinticEquation {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Self> {
        let coefficients = [a, b, c, d, e, f];
        let poly = PolynomialCoefficients::new(5, &coefficients)?;
        Ok(QuinticEquation { coefficients, poly })
    }

    pub fn polynomial(&self) -> &PolynomialCoefficients {
        &self.poly
    }

    pub fn solve(&self, options: &NewtonOptions) -> Option<f64> {
        solve_quintic(&self.coefficients, options)
    }
}
