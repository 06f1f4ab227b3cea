//! Orbit command implementation
//!
//! Prints `x0, F(x0), F(F(x0)), ...` for `F(x) = x² + 1`.

use std::io::Write;

use fsqrt_core::math::half_iterate::orbit;

use crate::{CliError, Result};

pub fn run<W: Write>(out: &mut W, x0: f64, steps: usize, precision: usize) -> Result<()> {
    if !x0.is_finite() {
        return Err(CliError::Solver(
            fsqrt_core::types::SolverError::InvalidInput(format!("x0 must be finite, got {}", x0)),
        ));
    }

    writeln!(out, "{:>4} {:>16}", "n", "F^n(x0)")?;
    for (n, x) in orbit(x0, steps).into_iter().enumerate() {
        writeln!(out, "{:>4} {:>16.p$e}", n, x, p = precision)?;
    }
    Ok(())
}
