// src/cli.rs
// Command-line front-end: turns raw arguments into validated inputs, runs the
// matching calculator and produces reports.
//
//   calcs [--json] [--config <path>] sieve <n> [<n> ...]
//   calcs [--json] [--config <path>] cubic [<a> <b> <c> <d>]
//   calcs [--json] [--config <path>] quintic [<a> <b> <c> <d> <e> <f>] [--guess <x>]

use log::{info, warn};

use crate::config::CalcsConfig;
use crate::error::{CalcError, Result};
use crate::integer_math::sieve::PrimalityChecker;
use crate::polynomial::cubic::solve_cubic;
use crate::polynomial::quintic::{NewtonOptions, QuinticEquation};
use crate::report::Report;

/// Default form values of the cubic calculator.
pub const DEFAULT_CUBIC: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// Default form values of the quintic calculator.
pub const DEFAULT_QUINTIC: [f64; 6] = [1.0, 2.0, 10.0, 1.0, 1.0, 1.0];

pub const USAGE: &str = "\
Usage:
  calcs [--json] [--config <path>] sieve <n> [<n> ...]
  calcs [--json] [--config <path>] cubic [<a> <b> <c> <d>]
  calcs [--json] [--config <path>] quintic [<a> <b> <c> <d> <e> <f>] [--guess <x>]";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Sieve { numbers: Vec<u64> },
    Cubic { coefficients: [f64; 4] },
    Quintic { coefficients: [f64; 6], guess: Option<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub json: bool,
    pub config_path: Option<String>,
}

impl Invocation {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut json = false;
        let mut config_path = None;
        let mut guess = None;
        let mut positional: Vec<&str> = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" if positional.is_empty() => {
                    return Ok(Invocation { command: Command::Help, json, config_path });
                }
                "--help" | "-h" => {
                    return Err(CalcError::InvalidInput(format!("unexpected flag '{}'", arg)));
                }
                "--json" => json = true,
                "--config" => {
                    let path = iter.next().ok_or_else(|| missing_value("--config"))?;
                    config_path = Some(path.clone());
                }
                "--guess" => {
                    let value = iter.next().ok_or_else(|| missing_value("--guess"))?;
                    guess = Some(parse_real(value)?);
                }
                other => positional.push(other),
            }
        }

        let Some((name, operands)) = positional.split_first() else {
            return Ok(Invocation { command: Command::Help, json, config_path });
        };

        if guess.is_some() && *name != "quintic" {
            return Err(CalcError::InvalidInput("--guess only applies to quintic".to_string()));
        }

        let command = match *name {
            "sieve" => {
                if operands.is_empty() {
                    return Err(CalcError::InvalidInput("sieve needs at least one number".to_string()));
                }
                let numbers = operands.iter().map(|s| parse_integer(s)).collect::<Result<Vec<_>>>()?;
                Command::Sieve { numbers }
            }
            "cubic" => Command::Cubic { coefficients: parse_coefficients(operands, DEFAULT_CUBIC)? },
            "quintic" => Command::Quintic {
                coefficients: parse_coefficients(operands, DEFAULT_QUINTIC)?,
                guess,
            },
            other => return Err(CalcError::InvalidInput(format!("unknown calculator '{}'", other))),
        };

        Ok(Invocation { command, json, config_path })
    }

    pub fn load_config(&self) -> Result<CalcsConfig> {
        let config = match &self.config_path {
            Some(path) => CalcsConfig::load_from_file(path)?,
            None => CalcsConfig::load()?,
        };
        Ok(config)
    }
}

/// Runs a parsed command and returns one report per result.
pub fn execute(command: &Command, config: &CalcsConfig) -> Result<Vec<Report>> {
    match command {
        Command::Help => Ok(Vec::new()),
        Command::Sieve { numbers } => {
            let checker = PrimalityChecker::from(&config.sieve);
            info!("Checking {} number(s) up to a limit of {}", numbers.len(), checker.max_value());
            let results = checker.check_many(numbers)?;
            Ok(numbers
                .iter()
                .zip(results)
                .map(|(&number, prime)| Report::Sieve { number, prime })
                .collect())
        }
        Command::Cubic { coefficients } => {
            let [a, b, c, d] = *coefficients;
            let roots = solve_cubic(a, b, c, d)?;
            info!("Cubic produced {} root(s)", roots.len());
            Ok(vec![Report::Cubic { roots }])
        }
        Command::Quintic { coefficients, guess } => {
            let [a, b, c, d, e, f] = *coefficients;
            let equation = QuinticEquation::new(a, b, c, d, e, f)?;
            let options = NewtonOptions {
                initial_guess: guess.unwrap_or(config.newton.initial_guess),
                ..config.newton
            };
            info!("Solving {} from x = {}", equation.polynomial(), options.initial_guess);
            let root = equation.solve(&options);
            if root.is_none() {
                warn!("Newton method did not converge.");
            }
            Ok(vec![Report::Quintic { root }])
        }
    }
}

/// Renders reports as text lines or JSON documents, one per report.
pub fn render(reports: &[Report], json: bool) -> Result<String> {
    let rendered = reports
        .iter()
        .map(|report| -> Result<String> {
            if json {
                Ok(report.to_json()?)
            } else {
                Ok(report.to_string())
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join("\n"))
}

fn missing_value(flag: &str) -> CalcError {
    CalcError::InvalidInput(format!("{} needs a value", flag))
}

fn parse_integer(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CalcError::InvalidInput(format!("'{}' is not a non-negative integer", raw)))
}

fn parse_real(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidInput(format!("'{}' is not a number", raw)))
}

fn parse_coefficients<const N: usize>(operands: &[&str], defaults: [f64; N]) -> Result<[f64; N]> {
    if operands.is_empty() {
        return Ok(defaults);
    }
    if operands.len() != N {
        return Err(CalcError::CoefficientCount { expected: N, got: operands.len() });
    }

    let mut coefficients = [0.0; N];
    for (slot, raw) in coefficients.iter_mut().zip(operands) {
        *slot = parse_real(raw)?;
    }
    Ok(coefficients)
}
