//! Conversions from RGB into grayscale, bitmap, CMYK and HSB.
//!
//! Each conversion is written once against normalized `f64` channels; the
//! 8-bit and [`Color`] entry points divide by 255 and delegate. Inputs
//! outside [0, 1] are clamped first (NaN counts as 0), so every normalized
//! output stays in [0, 1].
//!
//! Grayscale and bitmap use different formulas on purpose. Grayscale uses the
//! NTSC luma weights so that dense chart content keeps distinguishable gray
//! levels; bitmap posterization only needs a coarse split and uses the plain
//! channel average. Keep them separate.

use crate::color::{Cmyk, Color, Hsb, Rgb};
use crate::hex::{component_to_hex, normalized_to_hex};

/// NTSC luma weight for red, as used by Matlab's `rgb2gray`.
pub const LUMA_RED: f64 = 0.2989;
/// NTSC luma weight for green.
pub const LUMA_GREEN: f64 = 0.587;
/// NTSC luma weight for blue.
pub const LUMA_BLUE: f64 = 0.114;

/// Channel averages strictly below this posterize to black.
pub const BITMAP_THRESHOLD: f64 = 0.5;

fn unit(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

fn normalize(c: u8) -> f64 {
    f64::from(c) / 255.0
}

// -- Grayscale --

/// Perceptual gray from normalized RGB, capped at 1.0.
pub fn rgb_to_gray(r: f64, g: f64, b: f64) -> f64 {
    let gray = LUMA_RED * unit(r) + LUMA_GREEN * unit(g) + LUMA_BLUE * unit(b);
    gray.min(1.0)
}

pub fn rgb8_to_gray(r: u8, g: u8, b: u8) -> f64 {
    rgb_to_gray(normalize(r), normalize(g), normalize(b))
}

/// Perceptual gray of a color, ignoring alpha.
pub fn color_to_gray(color: Color) -> f64 {
    rgb8_to_gray(color.r, color.g, color.b)
}

// -- Bitmap --

/// Posterizes normalized RGB to exactly 0.0 or 1.0 by unweighted average.
///
/// The comparison is strict: an average of exactly 0.5 is white.
pub fn rgb_to_bitmap(r: f64, g: f64, b: f64) -> f64 {
    let average = (unit(r) + unit(g) + unit(b)) / 3.0;
    if average < BITMAP_THRESHOLD {
        0.0
    } else {
        1.0
    }
}

pub fn rgb8_to_bitmap(r: u8, g: u8, b: u8) -> f64 {
    rgb_to_bitmap(normalize(r), normalize(g), normalize(b))
}

pub fn color_to_bitmap(color: Color) -> f64 {
    rgb8_to_bitmap(color.r, color.g, color.b)
}

// -- CMYK --

/// Converts normalized RGB to CMYK.
///
/// Absolute black and absolute white are returned as exact constants without
/// evaluating the general formula, which is unstable at exactly those points.
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> Cmyk {
    let (r, g, b) = (unit(r), unit(g), unit(b));

    if r == 0.0 && g == 0.0 && b == 0.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 1.0,
        };
    }
    if r == 1.0 && g == 1.0 && b == 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 0.0,
        };
    }

    let k = 1.0 - r.max(g).max(b);
    // k < 1 here, but keep the divisor away from zero regardless.
    let denominator = f64::MIN_POSITIVE.max(1.0 - k);
    Cmyk {
        c: unit(1.0 - r / denominator),
        m: unit(1.0 - g / denominator),
        y: unit(1.0 - b / denominator),
        k,
    }
}

pub fn rgb8_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    rgb_to_cmyk(normalize(r), normalize(g), normalize(b))
}

pub fn color_to_cmyk(color: Color) -> Cmyk {
    rgb8_to_cmyk(color.r, color.g, color.b)
}

/// Standard CMYK to normalized RGB: `r = (1 - c)(1 - k)`.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = 1.0 - unit(cmyk.k);
    Rgb {
        r: (1.0 - unit(cmyk.c)) * k,
        g: (1.0 - unit(cmyk.m)) * k,
        b: (1.0 - unit(cmyk.y)) * k,
    }
}

/// CMYK to an opaque 8-bit color, rounding each channel.
pub fn cmyk_to_color(cmyk: Cmyk) -> Color {
    let rgb = cmyk_to_rgb(cmyk);
    let quantize = |c: f64| (c * 255.0).round() as u8;
    Color::rgb(quantize(rgb.r), quantize(rgb.g), quantize(rgb.b))
}

// -- HSB --

/// Smith's hexcone RGB to HSB over 8-bit channels.
///
/// Brightness is `max / 255`. Hue is in [0, 1) and is 0 for achromatic input.
pub fn rgb8_to_hsb(r: u8, g: u8, b: u8) -> Hsb {
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let brightness = max / 255.0;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    if saturation == 0.0 {
        return Hsb {
            h: 0.0,
            s: saturation,
            b: brightness,
        };
    }

    let red_c = (max - rf) / delta;
    let green_c = (max - gf) / delta;
    let blue_c = (max - bf) / delta;
    let sector = if rf == max {
        blue_c - green_c
    } else if gf == max {
        2.0 + red_c - blue_c
    } else {
        4.0 + green_c - red_c
    };
    let mut hue = sector / 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    Hsb {
        h: hue,
        s: saturation,
        b: brightness,
    }
}

pub fn color_to_hsb(color: Color) -> Hsb {
    rgb8_to_hsb(color.r, color.g, color.b)
}

/// Inverse of [`rgb8_to_hsb`], producing an opaque color.
///
/// Hue wraps, so only its fractional part matters. Saturation and brightness
/// are clamped to [0, 1].
pub fn hsb_to_color(hsb: Hsb) -> Color {
    let s = unit(hsb.s);
    let v = unit(hsb.b);
    let quantize = |c: f64| (c * 255.0 + 0.5) as u8;
    if s == 0.0 {
        let gray = quantize(v);
        return Color::rgb(gray, gray, gray);
    }

    let h = if hsb.h.is_finite() { hsb.h.rem_euclid(1.0) } else { 0.0 };
    let h6 = h * 6.0;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    // rem_euclid can round a tiny negative hue up to exactly 1.0.
    let (r, g, b) = match (h6.floor() as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::rgb(quantize(r), quantize(g), quantize(b))
}

// -- Hex tokens --

/// One hex token for the perceptual gray of `color`.
pub fn rgb_to_gray_hex(color: Color) -> String {
    normalized_to_hex(color_to_gray(color))
}

/// `"00"` or `"ff"` for the posterized value of `color`.
pub fn rgb_to_bitmap_hex(color: Color) -> String {
    normalized_to_hex(color_to_bitmap(color))
}

/// Hex tokens in cyan, magenta, yellow, black order.
pub fn rgb_to_cmyk_hex(color: Color) -> [String; 4] {
    color_to_cmyk(color).to_array().map(normalized_to_hex)
}

/// Hex tokens in red, green, blue order. Alpha is ignored.
pub fn rgb_to_rgb_hex(color: Color) -> [String; 3] {
    [color.r, color.g, color.b].map(|c| component_to_hex(i32::from(c)))
}
