//! Boundary validation for algorithm inputs.
//!
//! The algorithms assume validated input. Everything a host hands over
//! (parsed text, config values, CLI flags) passes through these constructors
//! first, so non-finite parameters or a zero degree never reach a recurrence.

use serde::{Deserialize, Serialize};

use crate::math::composita::CompositaParams;
use crate::types::SolverError;

/// Upper bounds enforced at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Deepest half-iterate recursion accepted
    pub max_iterations: usize,
    /// Largest composita degree accepted
    pub degree_limit: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            degree_limit: 200,
        }
    }
}

fn require_finite(name: &str, value: f64) -> Result<f64, SolverError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}

/// Validated input for the half-iterate approximator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfIterateInput {
    x_values: Vec<f64>,
    iterations: usize,
}

impl HalfIterateInput {
    /// # Errors
    /// `SolverError::InvalidInput` if any x is non-finite or `iterations`
    /// exceeds `limits.max_iterations`.
    pub fn new(
        x_values: Vec<f64>,
        iterations: usize,
        limits: &InputLimits,
    ) -> Result<Self, SolverError> {
        if iterations > limits.max_iterations {
            return Err(SolverError::InvalidInput(format!(
                "iterations must be at most {}, got {}",
                limits.max_iterations, iterations
            )));
        }
        for &x in &x_values {
            require_finite("x", x)?;
        }
        Ok(Self {
            x_values,
            iterations,
        })
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Validated input for the composita solver.
///
/// # Examples
/// ```
/// use fsqrt_core::types::{CompositaInput, InputLimits};
///
/// let input = CompositaInput::parse("4, 4, 1, 10", &InputLimits::default()).unwrap();
/// assert_eq!(input.max_degree(), 10);
/// assert_eq!(input.params().f1, 4.0);
///
/// assert!(CompositaInput::parse("4, 4, 1, 0", &InputLimits::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositaInput {
    params: CompositaParams<f64>,
    max_degree: usize,
}

impl CompositaInput {
    /// # Errors
    /// `SolverError::InvalidInput` if `f1`, `a` or `b` is non-finite, or
    /// `max_degree` is zero or above `limits.degree_limit`.
    pub fn new(
        max_degree: usize,
        params: CompositaParams<f64>,
        limits: &InputLimits,
    ) -> Result<Self, SolverError> {
        require_finite("f1", params.f1)?;
        require_finite("a", params.a)?;
        require_finite("b", params.b)?;

        if max_degree == 0 {
            return Err(SolverError::InvalidInput(
                "maxDegree must be a positive integer".to_string(),
            ));
        }
        if max_degree > limits.degree_limit {
            return Err(SolverError::InvalidInput(format!(
                "maxDegree must be at most {}, got {}",
                limits.degree_limit, max_degree
            )));
        }
        Ok(Self { params, max_degree })
    }

    /// Parse the comma form `f1,a,b,maxDegree`.
    ///
    /// # Errors
    /// `SolverError::InvalidInput` for a wrong field count, unparsable
    /// numbers, a non-integer or non-positive degree, or anything
    /// [`new`](Self::new) rejects.
    pub fn parse(text: &str, limits: &InputLimits) -> Result<Self, SolverError> {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(SolverError::InvalidInput(format!(
                "expected 4 comma-separated values (f1,a,b,maxDegree), got {}",
                fields.len()
            )));
        }

        let number = |name: &str, field: &str| -> Result<f64, SolverError> {
            field.parse::<f64>().map_err(|_| {
                SolverError::InvalidInput(format!("{} is not a number: '{}'", name, field))
            })
        };
        let f1 = number("f1", fields[0])?;
        let a = number("a", fields[1])?;
        let b = number("b", fields[2])?;
        let max_degree = fields[3].parse::<usize>().map_err(|_| {
            SolverError::InvalidInput(format!(
                "maxDegree must be a positive integer, got '{}'",
                fields[3]
            ))
        })?;

        Self::new(max_degree, CompositaParams::new(f1, a, b), limits)
    }

    pub fn params(&self) -> CompositaParams<f64> {
        self.params
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }
}
