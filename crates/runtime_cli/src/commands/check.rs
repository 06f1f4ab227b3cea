//! Check command implementation
//!
//! Prints the effective configuration and runs a quick self-test of both
//! solvers against cases with known answers.

use std::io::Write;

use fsqrt_core::math::composita::{try_compute_coefficients, CompositaParams, CompositaSolution};
use fsqrt_core::math::half_iterate::HalfIterateApproximator;
use fsqrt_core::traits::FunctionalSquareRoot;
use fsqrt_core::Algorithm;
use infra_config::Settings;
use tracing::info;

use crate::{CliError, Result};

/// Run the check command
pub fn run<W: Write>(out: &mut W, settings: &Settings) -> Result<()> {
    info!("Checking solver configuration...");

    writeln!(out, "fsqrt System Check")?;
    writeln!(out, "==================\n")?;

    writeln!(out, "Build:")?;
    writeln!(out, "  Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;

    writeln!(out, "Registered Algorithms:")?;
    for algorithm in Algorithm::ALL {
        writeln!(out, "  ✓ {}", algorithm.name())?;
    }
    writeln!(out)?;

    writeln!(out, "Settings:")?;
    writeln!(
        out,
        "  half_iterate: iterations={} max_iterations={}",
        settings.half_iterate.iterations, settings.half_iterate.max_iterations
    )?;
    writeln!(
        out,
        "  composita:    max_degree={} degree_limit={}",
        settings.composita.max_degree, settings.composita.degree_limit
    )?;
    writeln!(
        out,
        "  grid:         start={} step={} points={}",
        settings.grid.start, settings.grid.step, settings.grid.points
    )?;
    writeln!(out)?;

    writeln!(out, "Self-test:")?;

    // f(x) = 2x is the exact square root of 4x.
    let coefficients = try_compute_coefficients(3, 4.0_f64, 4.0, 0.0)?;
    if coefficients != [2.0, 0.0, 0.0] {
        return Err(CliError::Check(format!(
            "composita returned {:?} for f(f(x)) = 4x",
            coefficients
        )));
    }
    writeln!(out, "  ✓ composita: f(f(x)) = 4x gives f(x) = 2x")?;

    let mut solution = CompositaSolution::solve(10, CompositaParams::new(4.0_f64, 4.0, 1.0));
    let residual = solution.residual(0.1).abs();
    if residual > 1e-9 {
        return Err(CliError::Check(format!(
            "composita residual {:e} at x = 0.1 for f(f(x)) = 4x + x^2",
            residual
        )));
    }
    writeln!(out, "  ✓ composita: |f(f(0.1)) - F(0.1)| = {:.1e}", residual)?;

    let mut approx = HalfIterateApproximator::<f64>::new();
    let depth = settings.half_iterate.iterations;
    let value = approx.try_compute_f(0.0, depth)?;
    writeln!(out, "  ✓ half-iterate: f(0) ≈ {:.6} at depth {}", value, depth)?;
    writeln!(out)?;

    writeln!(out, "All checks passed!")?;
    Ok(())
}
