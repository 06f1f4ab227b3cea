//! CLI error types

use fsqrt_core::types::{DomainError, SolverError};
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] infra_config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected input or non-finite result
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Self-check failure
    #[error("Check failed: {0}")]
    Check(String),
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Solver(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_is_transparent() {
        let err: CliError = SolverError::InvalidInput("maxDegree must be positive".into()).into();
        assert_eq!(err.to_string(), "Invalid input: maxDegree must be positive");
    }

    #[test]
    fn test_domain_error_wraps_through_solver() {
        let err: CliError = DomainError::NegativeFactorial(-1).into();
        assert!(matches!(err, CliError::Solver(SolverError::Domain(_))));
    }
}
