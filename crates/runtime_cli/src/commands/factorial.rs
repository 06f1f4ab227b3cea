//! Factorial command implementation
//!
//! Prints `n!` and optionally appends `n,n!` to a CSV file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use fsqrt_core::math::combinatorics::try_factorial;
use tracing::info;

use crate::Result;

pub fn run<W: Write>(out: &mut W, n: i64, csv: Option<&Path>) -> Result<()> {
    let value: f64 = try_factorial(n)?;
    writeln!(out, "{}! = {}", n, value)?;

    if let Some(path) = csv {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{},{}", n, value)?;
        info!(path = %path.display(), "saved {}! to csv", n);
    }
    Ok(())
}
