//! Packed ARGB integers: `0xAARRGGBB`, alpha in the high byte.
//!
//! Packing masks every channel to its low 8 bits instead of rejecting
//! out-of-range input, so `pack(256, 0, 0, 0)` has a red channel of 0.

/// A 32-bit color whose bytes, high to low, are alpha, red, green, blue.
pub type PackedColor = u32;

/// Packs four channels into `0xAARRGGBB`, masking each to 8 bits.
pub fn pack(red: i32, green: i32, blue: i32, alpha: i32) -> PackedColor {
    let a = (alpha & 0xff) as u32;
    let r = (red & 0xff) as u32;
    let g = (green & 0xff) as u32;
    let b = (blue & 0xff) as u32;
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Packs RGB with an alpha of 0.
pub fn pack_rgb(red: i32, green: i32, blue: i32) -> PackedColor {
    pack(red, green, blue, 0)
}

pub fn unpack_red(packed: PackedColor) -> u8 {
    ((packed >> 16) & 0xff) as u8
}

pub fn unpack_green(packed: PackedColor) -> u8 {
    ((packed >> 8) & 0xff) as u8
}

pub fn unpack_blue(packed: PackedColor) -> u8 {
    (packed & 0xff) as u8
}

pub fn unpack_alpha(packed: PackedColor) -> u8 {
    ((packed >> 24) & 0xff) as u8
}

/// Moves each RGB channel of `pixel` toward 255 by `floor((255 - c) * fraction)`.
///
/// `fraction` is clamped to [0, 1] (NaN counts as 0). The alpha byte of the
/// result is always 0.
pub fn dim_pixel(pixel: PackedColor, fraction: f64) -> PackedColor {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let dim = |c: u8| -> i32 {
        let c = i32::from(c);
        c + ((255 - c) as f64 * fraction).floor() as i32
    };
    pack_rgb(
        dim(unpack_red(pixel)),
        dim(unpack_green(pixel)),
        dim(unpack_blue(pixel)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_places_channels_in_argb_order() {
        assert_eq!(pack(0x12, 0x34, 0x56, 0x78), 0x7812_3456);
    }

    #[test]
    fn pack_rgb_has_zero_alpha() {
        let packed = pack_rgb(255, 255, 255);
        assert_eq!(packed, 0x00ff_ffff);
        assert_eq!(unpack_alpha(packed), 0);
    }

    #[test]
    fn pack_masks_out_of_range_channels() {
        // 256 wraps to 0, 257 to 1, -1 to 255.
        let packed = pack(256, 257, -1, 0x1ff);
        assert_eq!(unpack_red(packed), 0);
        assert_eq!(unpack_green(packed), 1);
        assert_eq!(unpack_blue(packed), 255);
        assert_eq!(unpack_alpha(packed), 255);
    }

    #[test]
    fn unpack_extracts_each_byte() {
        let packed = 0xaabb_ccdd;
        assert_eq!(unpack_alpha(packed), 0xaa);
        assert_eq!(unpack_red(packed), 0xbb);
        assert_eq!(unpack_green(packed), 0xcc);
        assert_eq!(unpack_blue(packed), 0xdd);
    }

    #[test]
    fn dim_pixel_zero_fraction_keeps_rgb_and_drops_alpha() {
        let pixel = pack(10, 20, 30, 255);
        assert_eq!(dim_pixel(pixel, 0.0), pack_rgb(10, 20, 30));
    }

    #[test]
    fn dim_pixel_full_fraction_reaches_white() {
        let pixel = pack_rgb(0, 100, 200);
        assert_eq!(dim_pixel(pixel, 1.0), pack_rgb(255, 255, 255));
    }

    #[test]
    fn dim_pixel_half_fraction_floors() {
        // 0 + floor(255 * 0.5) = 127, 100 + floor(155 * 0.5) = 177
        let pixel = pack_rgb(0, 100, 255);
        assert_eq!(dim_pixel(pixel, 0.5), pack_rgb(127, 177, 255));
    }

    #[test]
    fn dim_pixel_clamps_fraction() {
        let pixel = pack_rgb(40, 80, 120);
        assert_eq!(dim_pixel(pixel, 3.0), pack_rgb(255, 255, 255));
        assert_eq!(dim_pixel(pixel, -1.0), pack_rgb(40, 80, 120));
        assert_eq!(dim_pixel(pixel, f64::NAN), pack_rgb(40, 80, 120));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unpack_reproduces_packed_channels(
                r in 0i32..=255,
                g in 0i32..=255,
                b in 0i32..=255,
                a in 0i32..=255,
            ) {
                let packed = pack(r, g, b, a);
                prop_assert_eq!(i32::from(unpack_red(packed)), r);
                prop_assert_eq!(i32::from(unpack_green(packed)), g);
                prop_assert_eq!(i32::from(unpack_blue(packed)), b);
                prop_assert_eq!(i32::from(unpack_alpha(packed)), a);
            }

            #[test]
            fn pack_is_exact_modulo_256(
                r in any::<i32>(),
                g in any::<i32>(),
                b in any::<i32>(),
                a in any::<i32>(),
            ) {
                let packed = pack(r, g, b, a);
                prop_assert_eq!(i32::from(unpack_red(packed)), r.rem_euclid(256));
                prop_assert_eq!(i32::from(unpack_green(packed)), g.rem_euclid(256));
                prop_assert_eq!(i32::from(unpack_blue(packed)), b.rem_euclid(256));
                prop_assert_eq!(i32::from(unpack_alpha(packed)), a.rem_euclid(256));
            }

            #[test]
            fn pack_of_unpack_is_identity(packed in any::<u32>()) {
                let repacked = pack(
                    i32::from(unpack_red(packed)),
                    i32::from(unpack_green(packed)),
                    i32::from(unpack_blue(packed)),
                    i32::from(unpack_alpha(packed)),
                );
                prop_assert_eq!(repacked, packed);
            }

            #[test]
            fn dim_pixel_never_darkens(packed in any::<u32>(), fraction in 0.0_f64..=1.0) {
                let dimmed = dim_pixel(packed, fraction);
                prop_assert!(unpack_red(dimmed) >= unpack_red(packed));
                prop_assert!(unpack_green(dimmed) >= unpack_green(packed));
                prop_assert!(unpack_blue(dimmed) >= unpack_blue(packed));
            }
        }
    }
}
