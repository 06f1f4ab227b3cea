//! Error types for functional square root computations.
//!
//! Two families are kept apart:
//! - [`DomainError`]: the algorithm ran, but the value it produced is not a
//!   usable real number (negative radicand, zero denominator, ...).
//! - [`SolverError`]: the caller handed in something the algorithms must never
//!   see (non-finite parameters, a zero degree, an unknown algorithm name).

use thiserror::Error;

/// Named reasons a computed value is not finite.
///
/// The raw algorithm contracts report these conditions as NaN or ±∞; the
/// `try_*` entry points translate them into one of these variants so callers
/// can branch on a tag instead of on floating-point propagation.
///
/// # Examples
/// ```
/// use fsqrt_core::types::DomainError;
///
/// let err = DomainError::DegenerateDenominator { n: 3, k: 1 };
/// assert_eq!(format!("{}", err), "Degenerate denominator at (n=3, k=1)");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// `f(x²+1) − 1` went negative somewhere below `x` in the recursion
    #[error("Negative radicand while evaluating x={x} at depth {depth}")]
    NegativeRadicand { x: f64, depth: usize },

    /// The x → x²+1 chain escaped to infinity
    #[error("Overflow while evaluating x={x} at depth {depth}")]
    Overflow { x: f64, depth: usize },

    /// Factorial of a negative integer
    #[error("Factorial undefined for negative argument {0}")]
    NegativeFactorial(i64),

    /// `f1^(n/2) + f1^(k/2)` was exactly zero
    #[error("Degenerate denominator at (n={n}, k={k})")]
    DegenerateDenominator { n: usize, k: usize },

    /// A coefficient came out NaN or infinite without a zero denominator
    #[error("Non-finite coefficient for x^{degree}")]
    NonFinite { degree: usize },
}

/// Errors raised at the boundary, before any recurrence is entered.
///
/// # Examples
/// ```
/// use fsqrt_core::types::SolverError;
///
/// let err = SolverError::InvalidInput("maxDegree must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: maxDegree must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Parameters rejected by validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Name lookup in the algorithm registry failed
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Computed value is not a finite real
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radicand_display() {
        let err = DomainError::NegativeRadicand { x: 0.5, depth: 2 };
        assert_eq!(
            format!("{}", err),
            "Negative radicand while evaluating x=0.5 at depth 2"
        );
    }

    #[test]
    fn test_negative_factorial_display() {
        let err = DomainError::NegativeFactorial(-3);
        assert_eq!(
            format!("{}", err),
            "Factorial undefined for negative argument -3"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = DomainError::NonFinite { degree: 4 };
        assert_eq!(format!("{}", err), "Non-finite coefficient for x^4");
    }

    #[test]
    fn test_unknown_algorithm_display() {
        let err = SolverError::UnknownAlgorithm("futureSolver".to_string());
        assert_eq!(format!("{}", err), "Unknown algorithm: futureSolver");
    }

    #[test]
    fn test_domain_error_converts_into_solver_error() {
        let err: SolverError = DomainError::DegenerateDenominator { n: 2, k: 1 }.into();
        assert_eq!(
            format!("{}", err),
            "Domain error: Degenerate denominator at (n=2, k=1)"
        );
        assert!(matches!(err, SolverError::Domain(_)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::InvalidInput("Test".to_string());
        let _: &dyn std::error::Error = &err;
        let _: &dyn std::error::Error = &DomainError::NegativeFactorial(-1);
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = DomainError::Overflow { x: 3.0, depth: 9 };
        let err2 = err1;
        assert_eq!(err1, err2);
    }
}
