//! Dark/light classification and foreground selection.
//!
//! Darkness is judged on HSB brightness rather than a channel average or luma,
//! since that is what tracks perceived dark versus light. The default cutoff
//! is 0.51 rather than 0.5 so that borderline mid-tones count as light.
//!
//! This is deliberately not the same test as [`crate::convert::rgb_to_bitmap`],
//! which averages channels and uses a strict `< 0.5`.

use crate::color::Color;
use crate::convert::rgb8_to_hsb;

/// Brightness at or below which a color counts as dark.
pub const DEFAULT_BRIGHTNESS_CUTOFF: f64 = 0.51;

/// Returns true if the HSB brightness of `color` is at most [`DEFAULT_BRIGHTNESS_CUTOFF`].
pub fn is_dark(color: Color) -> bool {
    is_dark_with_cutoff(color, DEFAULT_BRIGHTNESS_CUTOFF)
}

/// Returns true if the HSB brightness of `color` is at most `brightness_cutoff`.
///
/// Alpha is ignored.
pub fn is_dark_with_cutoff(color: Color, brightness_cutoff: f64) -> bool {
    is_rgb8_dark(color.r, color.g, color.b, brightness_cutoff)
}

pub fn is_rgb8_dark(r: u8, g: u8, b: u8, brightness_cutoff: f64) -> bool {
    rgb8_to_hsb(r, g, b).b <= brightness_cutoff
}

/// Picks a foreground that does not mask against `background`.
///
/// Always returns either [`Color::WHITE`] or [`Color::BLACK`].
pub fn foreground_for(background: Color) -> Color {
    foreground_for_with_cutoff(background, DEFAULT_BRIGHTNESS_CUTOFF)
}

pub fn foreground_for_with_cutoff(background: Color, brightness_cutoff: f64) -> Color {
    if is_dark_with_cutoff(background, brightness_cutoff) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::color_to_bitmap;

    #[test]
    fn mid_gray_is_dark_and_gets_white_text() {
        let gray = Color::rgb(128, 128, 128);
        assert!(is_dark(gray));
        assert_eq!(foreground_for(gray), Color::WHITE);
    }

    #[test]
    fn light_gray_is_light_and_gets_black_text() {
        let gray = Color::rgb(200, 200, 200);
        assert!(!is_dark(gray));
        assert_eq!(foreground_for(gray), Color::BLACK);
    }

    #[test]
    fn cutoff_is_inclusive() {
        // Brightness of 51/255 is exactly 0.2.
        let c = Color::rgb(51, 0, 0);
        assert!(is_dark_with_cutoff(c, 51.0 / 255.0));
        assert!(!is_dark_with_cutoff(c, 50.0 / 255.0));
    }

    #[test]
    fn default_cutoff_sits_above_half() {
        // 130/255 is about 0.5098, just under 0.51.
        assert!(is_dark(Color::rgb(130, 130, 130)));
        // 131/255 is about 0.5137.
        assert!(!is_dark(Color::rgb(131, 131, 131)));
    }

    #[test]
    fn saturated_colors_use_max_channel() {
        // Pure blue has low luma but full brightness.
        assert!(!is_dark(Color::rgb(0, 0, 255)));
        assert_eq!(foreground_for(Color::rgb(0, 0, 255)), Color::BLACK);
    }

    #[test]
    fn alpha_does_not_affect_classification() {
        assert!(is_dark(Color::rgba(10, 10, 10, 0)));
        assert!(!is_dark(Color::rgba(250, 250, 250, 0)));
    }

    #[test]
    fn differs_from_bitmap_posterization() {
        // Posterizes to white, yet counts as dark for contrast.
        let gray = Color::rgb(128, 128, 128);
        assert_eq!(color_to_bitmap(gray), 1.0);
        assert!(is_dark(gray));
    }

    #[test]
    fn extremes() {
        assert_eq!(foreground_for(Color::BLACK), Color::WHITE);
        assert_eq!(foreground_for(Color::WHITE), Color::BLACK);
        assert!(is_dark_with_cutoff(Color::WHITE, 1.0));
        assert!(!is_dark_with_cutoff(Color::BLACK, -0.1));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn foreground_is_black_or_white(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let fg = foreground_for(Color::rgb(r, g, b));
                prop_assert!(fg == Color::WHITE || fg == Color::BLACK);
            }

            #[test]
            fn darkness_is_monotonic_in_cutoff(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
                lo in 0.0_f64..=1.0,
                hi in 0.0_f64..=1.0,
            ) {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                let c = Color::rgb(r, g, b);
                if is_dark_with_cutoff(c, lo) {
                    prop_assert!(is_dark_with_cutoff(c, hi));
                }
            }
        }
    }
}
