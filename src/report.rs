// src/report.rs
//
// Presentation of calculator results, worded like the original result
// panels: four decimals per root and a plain sentence for primality.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Report {
    Sieve { number: u64, prime: bool },
    Cubic { roots: Vec<f64> },
    Quintic { root: Option<f64> },
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Sieve { number, prime } => {
                let verdict = if *prime { "prime" } else { "not prime" };
                write!(f, "The number {} is {}", number, verdict)
            }
            Report::Cubic { roots } => {
                let lines: Vec<String> = roots
                    .iter()
                    .enumerate()
                    .map(|(i, root)| format!("x{} = {:.4}", i + 1, unsigned_zero(*root)))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Report::Quintic { root: Some(root) } => write!(f, "x = {:.4}", unsigned_zero(*root)),
            Report::Quintic { root: None } => write!(f, "Newton method did not converge."),
        }
    }
}

// An exact -0.0 prints as 0.0000, like toFixed(4).
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
