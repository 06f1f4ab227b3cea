//! List command implementation

use std::io::Write;

use fsqrt_core::Algorithm;

use crate::Result;

/// Print every registered algorithm with its inputs.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    for algorithm in Algorithm::ALL {
        writeln!(out, "{}", algorithm.name())?;
        writeln!(out, "  {}", algorithm.description())?;
        writeln!(out, "  inputs: {}", algorithm.inputs().join(", "))?;
    }
    Ok(())
}
