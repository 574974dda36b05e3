//! Output color modes and path drawing modes.
//!
//! Both enums have lowercase canonical names, which are what print and vector
//! exporters write. Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::convert::{
    color_to_bitmap, color_to_cmyk, color_to_gray, rgb_to_bitmap_hex, rgb_to_cmyk_hex,
    rgb_to_gray_hex, rgb_to_rgb_hex,
};
use crate::error::ColorError;
use crate::hex::{push_component_hex, push_normalized_hex};

/// Color representation used for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// One bit per pixel, black or white.
    Bitmap,
    /// Perceptual gray.
    Grayscale,
    #[default]
    Rgb,
    Cmyk,
}

/// What the next path does when painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Draw the outline.
    #[default]
    Stroke,
    /// Fill the interior.
    Fill,
    /// Use the path as a clipping region.
    Clip,
}

impl ColorMode {
    pub const ALL: [ColorMode; 4] = [
        ColorMode::Bitmap,
        ColorMode::Grayscale,
        ColorMode::Rgb,
        ColorMode::Cmyk,
    ];

    /// Lowercase name, e.g. `"cmyk"`.
    pub fn canonical_name(self) -> &'static str {
        match self {
            ColorMode::Bitmap => "bitmap",
            ColorMode::Grayscale => "grayscale",
            ColorMode::Rgb => "rgb",
            ColorMode::Cmyk => "cmyk",
        }
    }

    /// Canonical names of every mode, in declaration order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.canonical_name()).collect()
    }

    /// Number of hex tokens written per pixel.
    pub fn components(self) -> usize {
        match self {
            ColorMode::Bitmap | ColorMode::Grayscale => 1,
            ColorMode::Rgb => 3,
            ColorMode::Cmyk => 4,
        }
    }

    /// Appends the hex tokens of `color` in this mode to `out`, without separators.
    ///
    /// RGB tokens are red, green, blue; CMYK tokens are cyan, magenta, yellow,
    /// black. Alpha is never written.
    pub fn push_hex(self, out: &mut String, color: Color) {
        match self {
            ColorMode::Bitmap => push_normalized_hex(out, color_to_bitmap(color)),
            ColorMode::Grayscale => push_normalized_hex(out, color_to_gray(color)),
            ColorMode::Rgb => {
                push_component_hex(out, i32::from(color.r));
                push_component_hex(out, i32::from(color.g));
                push_component_hex(out, i32::from(color.b));
            }
            ColorMode::Cmyk => {
                for v in color_to_cmyk(color).to_array() {
                    push_normalized_hex(out, v);
                }
            }
        }
    }

    /// The hex tokens of `color` in this mode, one per component.
    pub fn hex_tokens(self, color: Color) -> Vec<String> {
        match self {
            ColorMode::Bitmap => vec![rgb_to_bitmap_hex(color)],
            ColorMode::Grayscale => vec![rgb_to_gray_hex(color)],
            ColorMode::Rgb => rgb_to_rgb_hex(color).to_vec(),
            ColorMode::Cmyk => rgb_to_cmyk_hex(color).to_vec(),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for ColorMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.canonical_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownColorMode(s.to_string()))
    }
}

impl DrawMode {
    pub const ALL: [DrawMode; 3] = [DrawMode::Stroke, DrawMode::Fill, DrawMode::Clip];

    /// Lowercase name, which is also the PostScript painting operator.
    pub fn canonical_name(self) -> &'static str {
        match self {
            DrawMode::Stroke => "stroke",
            DrawMode::Fill => "fill",
            DrawMode::Clip => "clip",
        }
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.canonical_name()).collect()
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for DrawMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.canonical_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownDrawMode(s.to_string()))
    }
}
