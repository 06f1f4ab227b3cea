//! Error and input types.
//!
//! This module provides:
//! - `error`: domain errors (non-finite results) and boundary errors
//! - `input`: validated inputs for the solvers

pub mod error;
pub mod input;

pub use error::{DomainError, SolverError};
pub use input::{CompositaInput, HalfIterateInput, InputLimits};
