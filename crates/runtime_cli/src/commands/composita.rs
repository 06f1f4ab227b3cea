//! Composita command implementation
//!
//! Solves for the polynomial coefficients and prints them with a sample
//! table on the configured grid.

use std::io::Write;

use fsqrt_core::math::composita::CompositaParams;
use fsqrt_core::types::{CompositaInput, SolverError};
use fsqrt_core::AlgorithmRequest;
use infra_config::Settings;
use tracing::info;

use crate::Result;

/// Parameters given as separate flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositaFlags {
    pub f1: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub max_degree: Option<usize>,
}

/// Build the validated input from either the comma form or the flags.
fn resolve(
    settings: &Settings,
    input: Option<&str>,
    flags: CompositaFlags,
) -> Result<CompositaInput> {
    let limits = settings.limits();
    if let Some(text) = input {
        return Ok(CompositaInput::parse(text, &limits)?);
    }

    let missing = |name: &str| SolverError::InvalidInput(format!("missing --{}", name));
    let params = CompositaParams::new(
        flags.f1.ok_or_else(|| missing("f1"))?,
        flags.a.ok_or_else(|| missing("a"))?,
        flags.b.ok_or_else(|| missing("b"))?,
    );
    let max_degree = flags.max_degree.unwrap_or(settings.composita.max_degree);
    Ok(CompositaInput::new(max_degree, params, &limits)?)
}

/// Run the composita command
pub fn run<W: Write>(
    out: &mut W,
    settings: &Settings,
    input: Option<&str>,
    flags: CompositaFlags,
    json: bool,
) -> Result<()> {
    let input = resolve(settings, input, flags)?;
    let params = input.params();
    info!(
        f1 = params.f1,
        a = params.a,
        b = params.b,
        max_degree = input.max_degree(),
        "solving composita recurrence"
    );

    let output = AlgorithmRequest::Composita(input).run();
    super::render(
        out,
        &output,
        &settings.grid.values(),
        settings.output.precision,
        json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_comma_input() {
        let mut buf = Vec::new();
        run(&mut buf, &Settings::default(), Some("1,1,1,3"), CompositaFlags::default(), false)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("A(x) = 1.0000x^{1} + 0.5000x^{2} + -0.2500x^{3}"), "{text}");
    }

    #[test]
    fn test_flags_use_configured_degree() {
        let flags = CompositaFlags {
            f1: Some(4.0),
            a: Some(4.0),
            b: Some(1.0),
            max_degree: None,
        };
        let input = resolve(&Settings::default(), None, flags).unwrap();
        assert_eq!(input.max_degree(), 10);
    }

    #[test]
    fn test_missing_flag() {
        let flags = CompositaFlags {
            f1: Some(1.0),
            ..Default::default()
        };
        let err = resolve(&Settings::default(), None, flags).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: missing --a");
    }

    #[test]
    fn test_invalid_comma_input() {
        let mut buf = Vec::new();
        let err = run(&mut buf, &Settings::default(), Some("1,1,1,0"), CompositaFlags::default(), false)
            .unwrap_err();
        assert!(matches!(err, CliError::Solver(SolverError::InvalidInput(_))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        run(&mut buf, &Settings::default(), Some("4,4,0,2"), CompositaFlags::default(), true)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["kind"], "polynomial");
        assert_eq!(value["polynomial"], serde_json::json!([2.0, 0.0]));
        assert_eq!(value["params"]["f1"], 4.0);
    }
}
