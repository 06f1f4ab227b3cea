//! Settings and configuration structures.

use std::path::Path;

use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use fsqrt_core::math::half_iterate::sample_grid;
use fsqrt_core::types::InputLimits;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main application settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Half-iterate approximator defaults
    #[serde(default)]
    pub half_iterate: HalfIterateConfig,
    /// Composita solver defaults
    #[serde(default)]
    pub composita: CompositaConfig,
    /// Sampling grid for tables
    #[serde(default)]
    pub grid: GridConfig,
    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `FSQRT_ENV`)
    /// 3. Environment variables prefixed with `FSQRT_`, nested keys joined
    ///    by `__` (e.g. `FSQRT_COMPOSITA__MAX_DEGREE=20`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Like [`load`](Self::load), with an extra file layered above the
    /// environment-specific one.
    pub fn load_with(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("FSQRT_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));
        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }
        let builder = builder.add_source(
            Environment::with_prefix("FSQRT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        debug!(env = %env, extra = ?extra, "loading settings");
        Self::build(builder)
    }

    /// Parse settings from a TOML document, without files or environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hi = &self.half_iterate;
        if hi.iterations > hi.max_iterations {
            return Err(ConfigError::invalid(
                "half_iterate.iterations",
                format!("{} exceeds max_iterations {}", hi.iterations, hi.max_iterations),
            ));
        }

        let cc = &self.composita;
        if cc.max_degree == 0 {
            return Err(ConfigError::invalid("composita.max_degree", "must be positive"));
        }
        if cc.max_degree > cc.degree_limit {
            return Err(ConfigError::invalid(
                "composita.max_degree",
                format!("{} exceeds degree_limit {}", cc.max_degree, cc.degree_limit),
            ));
        }

        let grid = &self.grid;
        if !grid.start.is_finite() {
            return Err(ConfigError::invalid("grid.start", "must be finite"));
        }
        if !(grid.step.is_finite() && grid.step > 0.0) {
            return Err(ConfigError::invalid("grid.step", "must be finite and positive"));
        }
        if grid.points == 0 {
            return Err(ConfigError::invalid("grid.points", "must be positive"));
        }
        Ok(())
    }

    /// Boundary limits for [`fsqrt_core::types`] validation.
    pub fn limits(&self) -> InputLimits {
        InputLimits {
            max_iterations: self.half_iterate.max_iterations,
            degree_limit: self.composita.degree_limit,
        }
    }
}

/// Half-iterate approximator configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HalfIterateConfig {
    /// Depth used when none is given
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Deepest recursion accepted
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for HalfIterateConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_iterations() -> usize {
    5
}

fn default_max_iterations() -> usize {
    InputLimits::default().max_iterations
}

/// Composita solver configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CompositaConfig {
    /// Degree used when none is given
    #[serde(default = "default_max_degree")]
    pub max_degree: usize,
    /// Largest degree accepted
    #[serde(default = "default_degree_limit")]
    pub degree_limit: usize,
}

impl Default for CompositaConfig {
    fn default() -> Self {
        Self {
            max_degree: default_max_degree(),
            degree_limit: default_degree_limit(),
        }
    }
}

fn default_max_degree() -> usize {
    10
}

fn default_degree_limit() -> usize {
    InputLimits::default().degree_limit
}

/// Evenly spaced sample points `start + i·step`, `i < points`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_grid_start")]
    pub start: f64,
    #[serde(default = "default_grid_step")]
    pub step: f64,
    #[serde(default = "default_grid_points")]
    pub points: usize,
}

impl GridConfig {
    pub fn values(&self) -> Vec<f64> {
        sample_grid(self.start, self.step, self.points)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: default_grid_start(),
            step: default_grid_step(),
            points: default_grid_points(),
        }
    }
}

fn default_grid_start() -> f64 {
    -5.0
}

fn default_grid_step() -> f64 {
    0.1
}

fn default_grid_points() -> usize {
    101
}

/// Output formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Decimal places in printed tables and polynomials
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.half_iterate.iterations, 5);
        assert_eq!(settings.half_iterate.max_iterations, 64);
        assert_eq!(settings.composita.max_degree, 10);
        assert_eq!(settings.composita.degree_limit, 200);
        assert_eq!(settings.grid.points, 101);
        assert_eq!(settings.output.precision, 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_limits_match_core() {
        assert_eq!(Settings::default().limits(), InputLimits::default());
    }

    #[test]
    fn test_grid_values() {
        let values = GridConfig::default().values();
        assert_eq!(values.len(), 101);
        assert_eq!(values[0], -5.0);
    }

    #[test]
    fn test_from_toml_partial_override() {
        let settings = Settings::from_toml_str(
            r#"
            [composita]
            max_degree = 25

            [grid]
            start = -1.0
            step = 0.5
            points = 5
            "#,
        )
        .unwrap();
        assert_eq!(settings.composita.max_degree, 25);
        assert_eq!(settings.composita.degree_limit, 200);
        assert_eq!(settings.half_iterate, HalfIterateConfig::default());
        assert_eq!(settings.grid.values(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_from_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_rejects_degree_over_limit() {
        let err = Settings::from_toml_str(
            r#"
            [composita]
            max_degree = 50
            degree_limit = 20
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "composita.max_degree"));
    }

    #[test]
    fn test_rejects_depth_over_limit() {
        let mut settings = Settings::default();
        settings.half_iterate.iterations = 100;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_grid() {
        let mut settings = Settings::default();
        settings.grid.step = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.points = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_type_mismatch_is_config_crate_error() {
        let err = Settings::from_toml_str("[composita]\nmax_degree = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigCrateError(_)));
    }
}
