//! Hex image data blocks from packed ARGB pixels.
//!
//! The output is the body of a PostScript `image`/`colorimage` data source:
//! each pixel contributes [`ColorMode::components`] two-digit tokens in mode
//! order, all concatenated and wrapped at a fixed line width. Alpha is
//! dropped.

use printcolor_core::error::ColorError;
use printcolor_core::params::{param_color_mode, param_usize, LINE_WIDTH_KEY, MODE_KEY};
use printcolor_core::{Color, ColorMode, PackedColor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hex characters per line when nothing else is requested.
pub const DEFAULT_LINE_WIDTH: usize = 72;

/// How a block of pixels is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    pub mode: ColorMode,
    /// Characters per line; 0 disables wrapping.
    pub line_width: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            mode: ColorMode::default(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl EncodeOptions {
    /// Reads `mode` and `line_width` from a JSON params object, keeping the
    /// default for anything missing or malformed.
    pub fn from_params(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            mode: param_color_mode(params, MODE_KEY, defaults.mode),
            line_width: param_usize(params, LINE_WIDTH_KEY, defaults.line_width),
        }
    }
}

/// Concatenated hex tokens for one color, e.g. `"00ffff00"` for CMYK red.
pub fn encode_color(color: Color, mode: ColorMode) -> String {
    let mut out = String::with_capacity(mode.components() * 2);
    mode.push_hex(&mut out, color);
    out
}

/// Encodes a row-major `width * height` buffer of packed pixels.
///
/// Returns `ColorError::InvalidDimensions` for a zero or overflowing size and
/// `ColorError::DimensionMismatch` if the buffer length is wrong. The result
/// ends with a newline.
pub fn encode_pixels(
    pixels: &[PackedColor],
    width: usize,
    height: usize,
    options: &EncodeOptions,
) -> Result<String, ColorError> {
    if width == 0 || height == 0 {
        return Err(ColorError::InvalidDimensions);
    }
    let expected = width
        .checked_mul(height)
        .ok_or(ColorError::InvalidDimensions)?;
    if pixels.len() != expected {
        return Err(ColorError::DimensionMismatch {
            expected,
            got: pixels.len(),
        });
    }

    let hex_len = expected * options.mode.components() * 2;
    let mut stream = String::with_capacity(hex_len);
    for &pixel in pixels {
        options.mode.push_hex(&mut stream, Color::from_packed(pixel));
    }

    let block = wrap(&stream, options.line_width);
    tracing::debug!(
        width,
        height,
        mode = %options.mode,
        bytes = block.len(),
        "encoded hex image block"
    );
    Ok(block)
}

/// Inserts a newline after every `line_width` characters and at the end.
fn wrap(stream: &str, line_width: usize) -> String {
    if line_width == 0 {
        let mut out = String::with_capacity(stream.len() + 1);
        out.push_str(stream);
        out.push('\n');
        return out;
    }
    let mut out = String::with_capacity(stream.len() + stream.len() / line_width + 1);
    let mut rest = stream;
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(line_width));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }
    out
}
