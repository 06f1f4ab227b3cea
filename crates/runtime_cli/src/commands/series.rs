//! Series command implementation
//!
//! Samples the half-iterate approximation of `x² + 1` on a grid.

use std::io::Write;

use fsqrt_core::types::HalfIterateInput;
use fsqrt_core::AlgorithmRequest;
use infra_config::Settings;
use tracing::info;

use crate::Result;

/// Run the series command
///
/// Uses the configured depth and grid when `iterations` or `x_values` are
/// not given.
pub fn run<W: Write>(
    out: &mut W,
    settings: &Settings,
    iterations: Option<usize>,
    x_values: Vec<f64>,
    json: bool,
) -> Result<()> {
    let iterations = iterations.unwrap_or(settings.half_iterate.iterations);
    let x_values = if x_values.is_empty() {
        settings.grid.values()
    } else {
        x_values
    };

    let input = HalfIterateInput::new(x_values, iterations, &settings.limits())?;
    info!(points = input.x_values().len(), iterations, "computing half-iterate series");

    let output = AlgorithmRequest::HalfIterate(input).run();
    super::render(out, &output, &[], settings.output.precision, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use fsqrt_core::types::SolverError;

    #[test]
    fn test_series_on_explicit_points() {
        let mut buf = Vec::new();
        run(&mut buf, &Settings::default(), Some(0), vec![2.0], false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        // 2^√2 = 2.6651
        assert!(text.contains("2.6651"), "{text}");
    }

    #[test]
    fn test_series_defaults_to_grid() {
        let mut buf = Vec::new();
        run(&mut buf, &Settings::default(), Some(1), Vec::new(), false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        // header + 101 grid points
        assert_eq!(text.lines().count(), 102);
    }

    #[test]
    fn test_series_rejects_excessive_depth() {
        let mut buf = Vec::new();
        let err = run(&mut buf, &Settings::default(), Some(1000), vec![0.0], false).unwrap_err();
        assert!(matches!(err, CliError::Solver(SolverError::InvalidInput(_))));
    }
}
