//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to the
//! given writer so their output can be checked in tests.

pub mod check;
pub mod composita;
pub mod factorial;
pub mod list;
pub mod orbit;
pub mod series;

use std::io::Write;

use fsqrt_core::math::composita::CompositaSolution;
use fsqrt_core::traits::FunctionalSquareRoot;
use fsqrt_core::AlgorithmOutput;
use tracing::debug;

use crate::Result;

/// Print an algorithm result as a table, or as JSON when `json` is set.
pub(crate) fn render<W: Write>(
    out: &mut W,
    output: &AlgorithmOutput,
    grid: &[f64],
    precision: usize,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)?;
        return Ok(());
    }

    match output {
        AlgorithmOutput::Series { x_values, values } => {
            render_series(out, x_values, values, precision)
        }
        AlgorithmOutput::Polynomial(solution) => render_polynomial(out, solution, grid, precision),
    }
}

fn render_series<W: Write>(
    out: &mut W,
    x_values: &[f64],
    values: &[f64],
    precision: usize,
) -> Result<()> {
    writeln!(out, "{:>12} {:>16} {:>16}", "x", "F(x) = x^2 + 1", "f(x)")?;
    let mut skipped = 0;
    for (&x, &fx) in x_values.iter().zip(values) {
        if !fx.is_finite() {
            debug!(x, value = fx, "skipping non-finite point");
            skipped += 1;
            continue;
        }
        writeln!(
            out,
            "{:>12.p$} {:>16.p$} {:>16.p$}",
            x,
            x * x + 1.0,
            fx,
            p = precision
        )?;
    }
    if skipped > 0 {
        writeln!(out, "({} point(s) not computable at this depth)", skipped)?;
    }
    Ok(())
}

fn render_polynomial<W: Write>(
    out: &mut W,
    solution: &CompositaSolution<f64>,
    grid: &[f64],
    precision: usize,
) -> Result<()> {
    let params = solution.params;
    writeln!(out, "F(x) = {}x + {}x^2", params.a, params.b)?;
    writeln!(out, "A(x) = {:.*}", precision, solution.polynomial)?;
    writeln!(out)?;

    let mut solution = solution.clone();
    writeln!(
        out,
        "{:>12} {:>16} {:>16} {:>16}",
        "x", "F(x)", "A(x)", "A(A(x)) - F(x)"
    )?;
    for &x in grid {
        let fx = solution.target(x);
        let ax = solution.evaluate(x);
        let residual = solution.residual(x);
        writeln!(
            out,
            "{:>12.p$} {:>16.p$} {:>16.p$} {:>16.p$e}",
            x,
            fx,
            ax,
            residual,
            p = precision
        )?;
    }
    Ok(())
}
