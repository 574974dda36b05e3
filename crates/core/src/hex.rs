//! Two-character lowercase hex encoding of single color channels.
//!
//! PostScript image data needs a fixed number of bits per sample, so every
//! 8-bit channel is written as exactly two hex digits. Out-of-range input is
//! written as black (`"00"`) instead of failing.

use std::fmt::Write;

/// Hex token for a channel at zero intensity.
pub const BLACK_HEX: &str = "00";

/// Hex token for a channel at full intensity.
pub const WHITE_HEX: &str = "ff";

/// Appends the two-digit hex form of an 8-bit channel value to `out`.
///
/// Values below 0 or above 255 are written as `"00"`.
pub fn push_component_hex(out: &mut String, value: i32) {
    match value {
        0 => out.push_str(BLACK_HEX),
        255 => out.push_str(WHITE_HEX),
        1..=254 => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{value:02x}");
        }
        _ => {
            tracing::trace!(value, "channel out of 0..=255, writing black");
            out.push_str(BLACK_HEX);
        }
    }
}

/// Returns the two-digit hex form of an 8-bit channel value.
///
/// ```
/// use printcolor_core::hex::component_to_hex;
/// assert_eq!(component_to_hex(10), "0a");
/// assert_eq!(component_to_hex(300), "00");
/// ```
pub fn component_to_hex(value: i32) -> String {
    let mut out = String::with_capacity(2);
    push_component_hex(&mut out, value);
    out
}

/// Scales a normalized channel to 0..=255 with rounding, capped at 255.
///
/// Negative input yields a negative result, which the hex writers treat as
/// out of range. NaN yields 0.
pub fn normalized_to_component(value: f64) -> i32 {
    ((value * 255.0).round() as i32).min(255)
}

/// Appends the two-digit hex form of a normalized (0.0 to 1.0) channel to `out`.
pub fn push_normalized_hex(out: &mut String, value: f64) {
    push_component_hex(out, normalized_to_component(value));
}

/// Returns the two-digit hex form of a normalized (0.0 to 1.0) channel.
pub fn normalized_to_hex(value: f64) -> String {
    component_to_hex(normalized_to_component(value))
}
