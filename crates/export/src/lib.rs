#![deny(unsafe_code)]
//! Print-output encoding on top of `printcolor-core`.
//!
//! Builds the strings a PostScript or EPS writer needs: hex image data blocks
//! from packed pixels (`block`) and color-setting operators (`operator`).
//! Nothing here touches the filesystem; callers decide where the text goes.

pub mod block;
pub mod operator;

pub use block::{encode_color, encode_pixels, EncodeOptions, DEFAULT_LINE_WIDTH};
pub use operator::set_color_command;
