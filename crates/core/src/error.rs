//! Error types for the printcolor core.
//!
//! The conversion functions themselves never fail. These errors only come
//! from parsing user-supplied text and validating pixel buffers.

use thiserror::Error;

/// Errors produced while parsing colors and modes or validating buffers.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color mode name was not recognized.
    #[error("unknown color mode: {0}")]
    UnknownColorMode(String),

    /// A draw mode name was not recognized.
    #[error("unknown draw mode: {0}")]
    UnknownDrawMode(String),

    /// Width or height was zero, or their product overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel buffer did not hold `width * height` pixels.
    #[error("dimension mismatch: expected {expected} pixels, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
