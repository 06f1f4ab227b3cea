//! Tracing initialisation.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `FSQRT_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "fsqrt=info,fsqrt_core=warn,infra_config=warn";

/// Install the global subscriber.
///
/// Reads `FSQRT_LOG` for per-crate levels, e.g.
/// `FSQRT_LOG=fsqrt=debug,fsqrt_core=trace`. Logs go to stderr so tables
/// and JSON on stdout stay machine-readable. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("FSQRT_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
