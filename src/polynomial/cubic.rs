// src/polynomial/cubic.rs
//
// Real roots of a·x³ + b·x² + c·x + d = 0.
//
// The cubic is depressed with x = t + w, w = -b/(3a), into t³ + p·t + q = 0.
// The sign of Δ = q²/4 + p³/27 then selects the closed form:
//
//   Δ > 0   one real root      Cardano
//   Δ = 0   repeated root      Cardano with u = v, three values reported
//   Δ < 0   three real roots   trigonometric substitution
//
// q is not divided by a, so the closed forms are exact only for monic input
// (a = 1). This matches the reference calculator and is kept as is.
//
// Arithmetic is plain f64. NaN and infinities propagate rather than being
// turned into errors.

use std::f64::consts::PI;

use log::debug;

use crate::error::Result;
use crate::polynomial::coefficients::PolynomialCoefficients;

/// Solves a·x³ + b·x² + c·x + d = 0 and returns one or three real roots.
///
/// Fails with `InvalidCoefficient` when `a == 0`.
///
/// # Examples
/// ```
/// use calcs::polynomial::cubic::solve_cubic;
///
/// let roots = solve_cubic(1.0, -6.0, 11.0, -6.0).unwrap();
/// assert_eq!(roots.len(), 3);
/// ```
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<Vec<f64>> {
    let poly = PolynomialCoefficients::new(3, &[a, b, c, d])?;
    Ok(cubic_roots(&poly))
}

/// Roots of an already validated degree-3 polynomial.
pub fn cubic_roots(poly: &PolynomialCoefficients) -> Vec<f64> {
    debug_assert_eq!(poly.degree(), 3);
    let [a, b, c, d] = [
        poly.coefficients()[0],
        poly.coefficients()[1],
        poly.coefficients()[2],
        poly.coefficients()[3],
    ];

    let w = -(b / (3.0 * a));
    let p = (3.0 * a * w.powi(2) + 2.0 * b * w + c) / a;
    let q = a * w.powi(3) + b * w.powi(2) + c * w + d;
    let delta = q.powi(2) / 4.0 + p.powi(3) / 27.0;
    debug!("Depressed cubic: w = {}, p = {}, q = {}, delta = {}", w, p, q, delta);

    if delta > 0.0 {
        let u = (-q / 2.0 + delta.sqrt()).cbrt();
        let v = (-q / 2.0 - delta.sqrt()).cbrt();
        return vec![u + v + w];
    }

    if delta == 0.0 {
        let half_q = (q / 2.0).cbrt();
        let repeated = half_q + w;
        return vec![w - 2.0 * half_q, repeated, repeated];
    }

    // delta < 0 (or NaN): three distinct real roots
    let theta = (((3.0 * q) / (2.0 * p)) * (-3.0 / p).sqrt()).acos();
    let radius = 2.0 * (-p / 3.0).sqrt();
    (0..3)
        .map(|k| w + radius * ((theta + 2.0 * PI * k as f64) / 3.0).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    fn residual(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
        a * x.powi(3) + b * x.powi(2) + c * x + d
    }

    #[test]
    fn test_single_real_root() {
        let roots = solve_cubic(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(residual(1.0, 2.0, 3.0, 4.0, roots[0]).abs() < 1e-6);
        assert!((roots[0] - -1.6506).abs() < 1e-4);
    }

    #[test]
    fn test_three_distinct_roots() {
        let mut roots = solve_cubic(1.0, -6.0, 11.0, -6.0).unwrap();
        roots.sort_by(|x, y| x.partial_cmp(y).unwrap());
        for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert!((root - expected).abs() < 1e-4, "{} vs {}", root, expected);
        }
    }

    #[test]
    fn test_triple_root() {
        // (x - 1)^3
        let roots = solve_cubic(1.0, -3.0, 3.0, -1.0).unwrap();
        assert_eq!(roots, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_double_root_reported_twice() {
        // (x - 1)^2 (x + 2) = x^3 - 3x + 2
        let roots = solve_cubic(1.0, 0.0, -3.0, 2.0).unwrap();
        assert_eq!(roots, vec![-2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_zero_leading_coefficient() {
        let result = solve_cubic(0.0, 1.0, 2.0, 3.0);
        assert!(matches!(result, Err(CalcError::InvalidCoefficient)));
    }

    #[test]
    fn test_three_roots_shifted() {
        // (x + 1)(x - 2)(x - 4) = x^3 - 5x^2 + 2x + 8
        let mut roots = solve_cubic(1.0, -5.0, 2.0, 8.0).unwrap();
        roots.sort_by(|x, y| x.partial_cmp(y).unwrap());
        for (root, expected) in roots.iter().zip([-1.0, 2.0, 4.0]) {
            assert!((root - expected).abs() < 1e-4, "{} vs {}", root, expected);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let roots = solve_cubic(1.0, f64::NAN, 0.0, 0.0).unwrap();
        assert_eq!(roots.len(), 3);
        assert!(roots.iter().all(|r| r.is_nan()));
    }
}
