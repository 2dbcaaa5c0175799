// src/polynomial/coefficients.rs

use std::fmt::{Display, Formatter};

use crate::error::{CalcError, Result};

/// Real coefficients of a single-variable polynomial, highest degree first.
///
/// The leading coefficient is guaranteed non-zero for every degree above
/// zero, so a value of this type never describes a lower-degree equation.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCoefficients {
    coefficients: Vec<f64>,
}

impl PolynomialCoefficients {
    pub fn new(degree: usize, coefficients: &[f64]) -> Result<Self> {
        let expected = degree + 1;
        if coefficients.len() != expected {
            return Err(CalcError::CoefficientCount { expected, got: coefficients.len() });
        }
        if degree > 0 && coefficients[0] == 0.0 {
            return Err(CalcError::InvalidCoefficient);
        }

        Ok(PolynomialCoefficients { coefficients: coefficients.to_vec() })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn leading(&self) -> f64 {
        self.coefficients[0]
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Analytic derivative. The derivative of a constant is the zero constant.
    pub fn derivative(&self) -> PolynomialCoefficients {
        let degree = self.degree();
        if degree == 0 {
            return PolynomialCoefficients { coefficients: vec![0.0] };
        }

        let coefficients = self.coefficients[..degree]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * (degree - i) as f64)
            .collect();
        PolynomialCoefficients { coefficients }
    }
}

impl Display for PolynomialCoefficients {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let degree = self.degree();
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| match degree - i {
                0 => format!("{}", c),
                1 => format!("{}x", c),
                exponent => format!("{}x^{}", c, exponent),
            })
            .collect();
        write!(f, "{} = 0", terms.join(" + "))
    }
}
