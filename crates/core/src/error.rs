//! Construction-time errors.
//!
//! Gameplay never fails: rejected moves are no-ops and top-outs end the game.
//! The only errors the core reports are bad configuration values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid {width}x{height} is too large (at most {max} per side)")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("base drop interval must be positive")]
    ZeroDropInterval,

    #[error("minimum drop interval {min}ms exceeds base interval {base}ms")]
    MinIntervalAboveBase { min: u32, base: u32 },

    #[error("speed-up factor must be in (0, 1] (got {0})")]
    InvalidSpeedup(f64),

    #[error("level score step must be positive")]
    ZeroLevelStep,
}
