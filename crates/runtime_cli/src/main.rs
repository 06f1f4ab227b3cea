//! fsqrt CLI: functional square roots from the command line.
//!
//! Usage:
//!   fsqrt check
//!   fsqrt list
//!   fsqrt series --iterations 5 --x -1,0,1
//!   fsqrt orbit --x0 1.5
//!   fsqrt composita --input 1,1,1,10
//!   fsqrt factorial 20 --csv xvalue.csv

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infra_config::Settings;
use tracing::debug;

mod commands;
mod error;
mod logging;

pub use error::{CliError, Result};

use commands::composita::CompositaFlags;

#[derive(Parser)]
#[command(name = "fsqrt", version, about = "Functional square roots: find f with f(f(x)) = F(x)")]
struct Cli {
    /// Extra TOML settings file, layered over config/ and under FSQRT_* variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show settings and run a solver self-test
    Check,
    /// List registered algorithms
    List,
    /// Approximate f with f(f(x)) = x^2 + 1 on a set of points
    Series {
        /// Recursion depth (defaults to half_iterate.iterations)
        #[arg(short, long)]
        iterations: Option<usize>,
        /// Comma-separated x values (defaults to the configured grid)
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        x: Vec<f64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the orbit x0, F(x0), F(F(x0)), ... of F(x) = x^2 + 1
    Orbit {
        /// Starting point
        #[arg(long, allow_negative_numbers = true)]
        x0: f64,
        /// Number of applications of F
        #[arg(long, default_value = "5")]
        steps: usize,
    },
    /// Solve for polynomial f with f(f(x)) = a*x + b*x^2
    Composita {
        /// Parameters as "f1,a,b,maxDegree"
        #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["f1", "a", "b", "max_degree"])]
        input: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        f1: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        b: Option<f64>,
        /// Number of coefficients (defaults to composita.max_degree)
        #[arg(long)]
        max_degree: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print n! in double precision
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Append "n,n!" to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load_with(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check => commands::check::run(&mut out, &settings)?,
        Commands::List => commands::list::run(&mut out)?,
        Commands::Series { iterations, x, json } => {
            commands::series::run(&mut out, &settings, iterations, x, json)?
        }
        Commands::Orbit { x0, steps } => {
            commands::orbit::run(&mut out, x0, steps, settings.output.precision)?
        }
        Commands::Composita {
            input,
            f1,
            a,
            b,
            max_degree,
            json,
        } => {
            let flags = CompositaFlags {
                f1,
                a,
                b,
                max_degree,
            };
            commands::composita::run(&mut out, &settings, input.as_deref(), flags, json)?
        }
        Commands::Factorial { n, csv } => commands::factorial::run(&mut out, n, csv.as_deref())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_series_with_negative_points() {
        let cli = Cli::try_parse_from(["fsqrt", "series", "-i", "3", "--x", "-1.5,0,2"]).unwrap();
        match cli.command {
            Commands::Series { iterations, x, json } => {
                assert_eq!(iterations, Some(3));
                assert_eq!(x, vec![-1.5, 0.0, 2.0]);
                assert!(!json);
            }
            _ => panic!("Expected series command"),
        }
    }

    #[test]
    fn test_parse_series_all_negative_points_short_flag() {
        let cli = Cli::try_parse_from(["fsqrt", "series", "-x", "-3,-2.5", "--json"]).unwrap();
        match cli.command {
            Commands::Series { x, json, .. } => {
                assert_eq!(x, vec![-3.0, -2.5]);
                assert!(json);
            }
            _ => panic!("Expected series command"),
        }
    }

    #[test]
    fn test_input_conflicts_with_flags() {
        let result = Cli::try_parse_from(["fsqrt", "composita", "--input", "1,1,1,3", "--f1", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_negative_factorial() {
        let cli = Cli::try_parse_from(["fsqrt", "factorial", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Factorial { n: -1, csv: None }));
    }
}
