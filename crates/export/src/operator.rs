//! PostScript color-setting operators for a single color.

use printcolor_core::convert::{color_to_bitmap, color_to_cmyk, color_to_gray};
use printcolor_core::hex::normalized_to_component;
use printcolor_core::{Color, ColorMode, Rgb};

/// Formats a normalized value with at most four decimals and no trailing zeros.
fn operand(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// The operator line that makes `color` current in the given mode.
///
/// Bitmap and grayscale use `setgray`, RGB `setrgbcolor`, CMYK `setcmykcolor`.
pub fn set_color_command(color: Color, mode: ColorMode) -> String {
    match mode {
        ColorMode::Bitmap => format!("{} setgray", operand(color_to_bitmap(color))),
        ColorMode::Grayscale => {
            // Same 8-bit level as the hex token, so white stays exactly 1.
            let level = normalized_to_component(color_to_gray(color));
            format!("{} setgray", operand(f64::from(level) / 255.0))
        }
        ColorMode::Rgb => {
            let rgb = Rgb::from(color);
            format!(
                "{} {} {} setrgbcolor",
                operand(rgb.r),
                operand(rgb.g),
                operand(rgb.b)
            )
        }
        ColorMode::Cmyk => {
            let [c, m, y, k] = color_to_cmyk(color).to_array();
            format!(
                "{} {} {} {} setcmykcolor",
                operand(c),
                operand(m),
                operand(y),
                operand(k)
            )
        }
    }
}
