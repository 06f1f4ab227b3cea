//! Functional square root algorithms.
//!
//! ## Submodules
//! - `half_iterate`: memoized approximation of `f` with `f(f(x)) = x² + 1`
//! - `composita`: exact polynomial coefficients of `f` via the composita recurrence
//! - `combinatorics`: floating-point factorial and binomial coefficients
//! - `polynomial`: evaluation and rendering of the resulting polynomials

pub mod combinatorics;
pub mod composita;
pub mod half_iterate;
pub mod polynomial;
