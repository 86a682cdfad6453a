//! Error types for configuration and conversion

use thiserror::Error;

/// A configuration value outside its accepted range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("output_width must be at least 1, got {0}")]
    OutputWidth(u32),

    #[error("contrast must be a positive finite number, got {0}")]
    Contrast(f64),

    #[error("density must be in (0, 1], got {0}")]
    Density(f64),
}

/// Errors returned by [`crate::convert`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}
