//! Color value types.
//!
//! [`Color`] is the 8-bit RGBA form that callers hand around; [`Rgb`],
//! [`Cmyk`] and [`Hsb`] are the normalized results of the conversions in
//! [`crate::convert`]. All of them are plain `Copy` values.

use std::str::FromStr;

use crate::error::ColorError;
use crate::hex::push_component_hex;
use crate::packed::{pack, unpack_alpha, unpack_blue, unpack_green, unpack_red, PackedColor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const RGB_RED_INDEX: usize = 0;
pub const RGB_GREEN_INDEX: usize = RGB_RED_INDEX + 1;
pub const RGB_BLUE_INDEX: usize = RGB_GREEN_INDEX + 1;
pub const NUMBER_OF_RGB_COMPONENTS: usize = 3;

pub const HSB_HUE_INDEX: usize = 0;
pub const HSB_SATURATION_INDEX: usize = HSB_HUE_INDEX + 1;
pub const HSB_BRIGHTNESS_INDEX: usize = HSB_SATURATION_INDEX + 1;
pub const NUMBER_OF_HSB_COMPONENTS: usize = 3;

pub const CMYK_CYAN_INDEX: usize = 0;
pub const CMYK_MAGENTA_INDEX: usize = CMYK_CYAN_INDEX + 1;
pub const CMYK_YELLOW_INDEX: usize = CMYK_MAGENTA_INDEX + 1;
pub const CMYK_BLACK_INDEX: usize = CMYK_YELLOW_INDEX + 1;
pub const NUMBER_OF_CMYK_COMPONENTS: usize = 4;

/// 8-bit RGBA color. Alpha 255 is opaque.
///
/// Serializes as `"#rrggbb"`, or `"#rrggbbaa"` when not fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Normalized RGB with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Normalized CMYK with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Hue, saturation and brightness, each in [0, 1]. Hue 1.0 wraps to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_packed(packed: PackedColor) -> Self {
        Self {
            r: unpack_red(packed),
            g: unpack_green(packed),
            b: unpack_blue(packed),
            a: unpack_alpha(packed),
        }
    }

    pub fn to_packed(self) -> PackedColor {
        pack(
            i32::from(self.r),
            i32::from(self.g),
            i32::from(self.b),
            i32::from(self.a),
        )
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"`; the `#` is optional and case is ignored.
    ///
    /// Six-digit input is opaque.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| ColorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Color { r, g, b, a })
    }

    /// Formats as `"#rrggbb"`, appending the alpha byte only when it is not 255.
    pub fn to_hex(self) -> String {
        let mut out = String::with_capacity(9);
        out.push('#');
        push_component_hex(&mut out, i32::from(self.r));
        push_component_hex(&mut out, i32::from(self.g));
        push_component_hex(&mut out, i32::from(self.b));
        if self.a != 255 {
            push_component_hex(&mut out, i32::from(self.a));
        }
        out
    }

    /// Parses a comma-separated `"r,g,b"` or `"r,g,b,a"` list of 0..=255 values.
    fn from_decimal_list(s: &str) -> Result<Color, ColorError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorError::InvalidColor(format!(
                "expected 3 or 4 comma-separated channels, got {}",
                parts.len()
            )));
        }
        let channel = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorError::InvalidColor(format!(
                    "invalid channel {part:?}: expected decimal digits"
                )));
            }
            part.parse::<u8>()
                .map_err(|e| ColorError::InvalidColor(format!("invalid channel {part:?}: {e}")))
        };
        let a = match parts.get(3) {
            Some(part) => channel(*part)?,
            None => 255,
        };
        Ok(Color {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
            a,
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts hex (`"#c86432"`) or decimal channels (`"200,100,50"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            Color::from_decimal_list(s)
        } else {
            Color::from_hex(s)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        Rgb {
            r: f64::from(c.r) / 255.0,
            g: f64::from(c.g) / 255.0,
            b: f64::from(c.b) / 255.0,
        }
    }
}

impl Rgb {
    pub fn to_array(self) -> [f64; NUMBER_OF_RGB_COMPONENTS] {
        [self.r, self.g, self.b]
    }
}

impl Cmyk {
    /// Components in cyan, magenta, yellow, black order.
    pub fn to_array(self) -> [f64; NUMBER_OF_CMYK_COMPONENTS] {
        let mut out = [0.0; NUMBER_OF_CMYK_COMPONENTS];
        out[CMYK_CYAN_INDEX] = self.c;
        out[CMYK_MAGENTA_INDEX] = self.m;
        out[CMYK_YELLOW_INDEX] = self.y;
        out[CMYK_BLACK_INDEX] = self.k;
        out
    }
}

impl Hsb {
    pub fn to_array(self) -> [f64; NUMBER_OF_HSB_COMPONENTS] {
        let mut out = [0.0; NUMBER_OF_HSB_COMPONENTS];
        out[HSB_HUE_INDEX] = self.h;
        out[HSB_SATURATION_INDEX] = self.s;
        out[HSB_BRIGHTNESS_INDEX] = self.b;
        out
    }
}
