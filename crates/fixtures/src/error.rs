use thiserror::Error;

use sphere_types::LoopError;

/// Structured failure information for fractal configuration and loop
/// generation.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error("fractal dimension {dimension} outside the valid range [1.0, 2.0)")]
    InvalidDimension { dimension: f64 },

    #[error("min_level {min_level} exceeds max_level {max_level}")]
    MinAboveMax { min_level: u32, max_level: u32 },

    #[error("max_level must be configured before building")]
    MaxLevelUnset,

    #[error("projected vertex collapsed to the zero vector")]
    DegenerateVertex,

    #[error(transparent)]
    DegenerateLoop(#[from] LoopError),
}
