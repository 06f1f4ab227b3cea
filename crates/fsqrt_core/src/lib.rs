//! # fsqrt_core
//!
//! Functional square roots: given `F`, find `f` with `f(f(x)) = F(x)`.
//!
//! Two solvers are provided:
//!
//! - [`math::half_iterate`]: a memoized approximation of `f` for
//!   `F(x) = x² + 1`, unwinding `f(x) = √(f(x² + 1) − 1)` a chosen number of
//!   times from the seed `|x|^√2`
//! - [`math::composita`]: exact polynomial coefficients of `f` for quadratic
//!   targets, from a triangular recurrence over compositae
//!
//! Both are pure and synchronous. Every memo table is owned by a value the
//! caller creates, so no state survives between independent calls.
//!
//! ## Error model
//!
//! The raw contracts return NaN or ±∞ for results that are not real numbers.
//! The `try_*` variants return [`types::DomainError`] instead, and
//! [`types::input`] rejects invalid caller input with
//! [`types::SolverError`] before any recurrence runs.
//!
//! ## Example
//!
//! ```
//! use fsqrt_core::math::composita::compute_coefficients;
//! use fsqrt_core::math::half_iterate::create_series;
//! use fsqrt_core::math::polynomial::evaluate_polynomial;
//!
//! let series = create_series(&[-1.0_f64, 0.0, 1.0], 4);
//! assert_eq!(series.len(), 3);
//!
//! let coefficients = compute_coefficients(8, 4.0_f64, 4.0, 1.0);
//! let f = |x: f64| evaluate_polynomial(&coefficients, x);
//! assert!((f(f(0.05)) - (4.0 * 0.05 + 0.05 * 0.05)).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod math;
pub mod traits;
pub mod types;

pub use algorithms::{Algorithm, AlgorithmOutput, AlgorithmRequest};
