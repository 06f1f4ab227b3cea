//! Algorithm registry.
//!
//! The solvers are selected through the [`Algorithm`] enum rather than a
//! name → function table. Lookups by name go through `FromStr`, and
//! [`AlgorithmRequest`] carries validated input for exactly one variant, so
//! dispatch is a `match`. Adding a solver means adding a variant.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::math::composita::CompositaSolution;
use crate::math::half_iterate::HalfIterateApproximator;
use crate::types::{CompositaInput, HalfIterateInput, SolverError};

/// Registered solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Memoized approximation of `f` with `f(f(x)) = x² + 1`
    HalfIterate,
    /// Polynomial `f` with `f(f(x)) = a·x + b·x²` from the composita recurrence
    Composita,
}

impl Algorithm {
    /// Every registered algorithm, in registration order.
    pub const ALL: [Algorithm; 2] = [Algorithm::HalfIterate, Algorithm::Composita];

    /// Registry key.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HalfIterate => "numericalHalfIterate",
            Algorithm::Composita => "compositaSolver",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::HalfIterate => "Numerical approximation for f(f(x)) = x^2 + 1.",
            Algorithm::Composita => "Composita calculator for A(A(x)) = ax + bx^2.",
        }
    }

    /// Names of the inputs the algorithm consumes.
    pub fn inputs(&self) -> &'static [&'static str] {
        match self {
            Algorithm::HalfIterate => &["xValues", "iterations"],
            Algorithm::Composita => &["f1", "a", "b", "maxDegree"],
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SolverError;

    /// Accepts the registry key or the short CLI spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numericalHalfIterate" | "half-iterate" => Ok(Algorithm::HalfIterate),
            "compositaSolver" | "composita" => Ok(Algorithm::Composita),
            other => Err(SolverError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Validated input for one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmRequest {
    HalfIterate(HalfIterateInput),
    Composita(CompositaInput),
}

/// Result of [`AlgorithmRequest::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmOutput {
    /// Approximated `f(x)` for each input x; non-finite entries serialize as `null`
    Series {
        x_values: Vec<f64>,
        values: Vec<f64>,
    },
    /// Solved polynomial
    Polynomial(CompositaSolution<f64>),
}

impl AlgorithmRequest {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmRequest::HalfIterate(_) => Algorithm::HalfIterate,
            AlgorithmRequest::Composita(_) => Algorithm::Composita,
        }
    }

    /// Run the selected algorithm with a memo scoped to this call.
    pub fn run(&self) -> AlgorithmOutput {
        debug!(algorithm = %self.algorithm(), "dispatching request");
        match self {
            AlgorithmRequest::HalfIterate(input) => {
                let mut approximator = HalfIterateApproximator::with_depth(input.iterations());
                let values = approximator.create_series(input.x_values(), input.iterations());
                AlgorithmOutput::Series {
                    x_values: input.x_values().to_vec(),
                    values,
                }
            }
            AlgorithmRequest::Composita(input) => AlgorithmOutput::Polynomial(
                CompositaSolution::solve(input.max_degree(), input.params()),
            ),
        }
    }
}
