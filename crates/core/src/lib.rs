#![deny(unsafe_code)]
//! Color-model conversions for print and vector output.
//!
//! Provides packed ARGB encoding (`packed`), fixed-width hex channel encoding
//! (`hex`), RGB to grayscale/bitmap/CMYK/HSB conversion (`convert`), and
//! dark/light contrast classification (`contrast`), plus the `Color` value
//! types and the `ColorMode`/`DrawMode` enums. Every conversion is a pure,
//! total function: out-of-range input is masked, clamped or replaced by black
//! rather than reported.

pub mod color;
pub mod contrast;
pub mod convert;
pub mod error;
pub mod hex;
pub mod mode;
pub mod packed;
pub mod params;

pub use color::{Cmyk, Color, Hsb, Rgb};
pub use contrast::{foreground_for, is_dark, DEFAULT_BRIGHTNESS_CUTOFF};
pub use error::ColorError;
pub use mode::{ColorMode, DrawMode};
pub use packed::PackedColor;
