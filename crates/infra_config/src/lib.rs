//! # infra_config
//!
//! Runtime settings for the fsqrt solvers.
//!
//! Loads default iteration depths, degree limits and the sampling grid from
//! TOML files and environment variables, and turns them into the
//! [`InputLimits`](fsqrt_core::types::InputLimits) the core validates against.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Default depth: {}", settings.half_iterate.iterations);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{CompositaConfig, GridConfig, HalfIterateConfig, OutputConfig, Settings};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CompositaConfig, ConfigError, GridConfig, HalfIterateConfig, OutputConfig, Settings,
    };
}
