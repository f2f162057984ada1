//! Conversions between the canonical sRGB color and the XYZ and CMYK
//! representations.
//!
//! All conversions are pure functions of their input. XYZ values use the
//! D65 white point scaled by 100. CMYK values are rounded to 3 decimal
//! places, with halfway cases rounded away from zero.
//!
//! ```rust
//! use colorsync::{convert, Srgb};
//! let xyz = convert::rgb_to_xyz(&Srgb::WHITE);
//! let (srgb, clip) = convert::xyz_to_rgb(&xyz);
//! assert!(!clip.is_clipped());
//! assert_eq!(srgb.to_rgb8(), Srgb::WHITE.to_rgb8());
//! ```

use crate::{
    color::{Clip, Component},
    math::round_to,
    models::{Cmyk, Srgb, SrgbLinear, Xyz},
};

/// Decimal places CMYK channels and CMYK derived sRGB channels are kept to.
pub const CMYK_PRECISION: i32 = 3;

/// Black ink at or above this level is treated as pure black.
const BLACK_THRESHOLD: Component = 0.9999;

/// Convert a canonical sRGB color to CIE-XYZ (D65, white at `Y = 100`).
pub fn rgb_to_xyz(rgb: &Srgb) -> Xyz {
    Xyz::from(rgb.to_linear_light().to_xyz_unit().map(|v| v * 100.0))
}

/// Convert CIE-XYZ (D65, white at `Y = 100`) to the canonical sRGB color.
///
/// Channels that land outside `[0, 1]` are clamped and reported in the
/// returned [`Clip`] flags.
pub fn xyz_to_rgb(xyz: &Xyz) -> (Srgb, Clip) {
    SrgbLinear::from_xyz_unit(xyz.to_array().map(|v| v / 100.0))
        .to_gamma_encoded()
        .clip()
}

/// Convert a canonical sRGB color to CMYK.
pub fn rgb_to_cmyk(rgb: &Srgb) -> Cmyk {
    let black = 1.0 - rgb.red.max(rgb.green).max(rgb.blue);

    // Avoid dividing by a (near) zero amount of non-black ink.
    if black >= BLACK_THRESHOLD {
        return Cmyk::BLACK;
    }

    let ink = |channel: Component| (1.0 - channel - black) / (1.0 - black);

    Cmyk::new(ink(rgb.red), ink(rgb.green), ink(rgb.blue), black)
        .map(|v| round_to(v.clamp(0.0, 1.0), CMYK_PRECISION))
}

/// Convert CMYK to the canonical sRGB color. Input channels are clamped to
/// `[0, 1]` first, so the result is always in gamut.
pub fn cmyk_to_rgb(cmyk: &Cmyk) -> Srgb {
    let Cmyk {
        cyan,
        magenta,
        yellow,
        black,
    } = cmyk.map(|v| v.clamp(0.0, 1.0));

    Srgb::new(
        (1.0 - cyan) * (1.0 - black),
        (1.0 - magenta) * (1.0 - black),
        (1.0 - yellow) * (1.0 - black),
    )
    .map(|v| round_to(v, CMYK_PRECISION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::Rgb8;

    #[test]
    fn test_rgb_to_xyz() {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (255, 255, 255, 95.0456, 100.0, 108.8754),
            (0, 0, 0, 0.0, 0.0, 0.0),
            (255, 0, 0, 41.2453, 21.2671, 1.9334),
            (0, 255, 0, 35.7580, 71.5160, 11.9193),
            (0, 0, 255, 18.0423, 7.2169, 95.0227),
            (210, 105, 30, 31.867294, 23.902497, 4.163479),
        ];

        for &(r, g, b, x, y, z) in TESTS {
            let xyz = rgb_to_xyz(&Rgb8::new(r, g, b).to_srgb());
            assert_component_eq!(xyz.x, x);
            assert_component_eq!(xyz.y, y);
            assert_component_eq!(xyz.z, z);
        }
    }

    #[test]
    fn rgb_xyz_round_trip_is_never_clipped() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb8::new(r, g, b);
                    let (back, clip) = xyz_to_rgb(&rgb_to_xyz(&rgb.to_srgb()));
                    assert!(!clip.is_clipped(), "{rgb} was clipped: {clip:?}");

                    let back = back.to_rgb8();
                    assert!(back.red.abs_diff(r) <= 1, "{rgb} -> {back}");
                    assert!(back.green.abs_diff(g) <= 1, "{rgb} -> {back}");
                    assert!(back.blue.abs_diff(b) <= 1, "{rgb} -> {back}");
                }
            }
        }
    }

    #[test]
    fn rgb_xyz_round_trip_along_the_cube_edges() {
        // Every value of one channel, with the other two at 0 or 255.
        for value in 0..=255u8 {
            for [a, b] in [[0, 0], [0, 255], [255, 0], [255, 255]] {
                for rgb in [
                    Rgb8::new(value, a, b),
                    Rgb8::new(a, value, b),
                    Rgb8::new(a, b, value),
                ] {
                    let (back, clip) = xyz_to_rgb(&rgb_to_xyz(&rgb.to_srgb()));
                    assert!(!clip.is_clipped(), "{rgb} was clipped: {clip:?}");
                    assert_eq!(back.to_rgb8(), rgb);
                }
            }
        }
    }

    #[test]
    fn out_of_box_xyz_is_clipped() {
        const TESTS: &[[Component; 3]] = &[
            [200.0, 0.0, 0.0],
            [0.0, 150.0, 0.0],
            [0.0, 0.0, 200.0],
            [-10.0, 50.0, 50.0],
            [96.0, 100.0, 108.8754],
            [95.0456, 100.0, 120.0],
            [1000.0, 1000.0, 1000.0],
        ];

        for &xyz in TESTS {
            let (rgb, clip) = xyz_to_rgb(&Xyz::from(xyz));
            assert!(clip.is_clipped(), "{xyz:?} was not clipped");
            for v in rgb.to_array() {
                assert!((0.0..=1.0).contains(&v), "{xyz:?} produced {rgb:?}");
            }
        }
    }

    #[test]
    fn clip_flags_name_the_channels() {
        // Pure X drives red above one and green below zero.
        let (rgb, clip) = xyz_to_rgb(&Xyz::new(95.0456, 0.0, 0.0));
        assert_eq!(clip, Clip::RED | Clip::GREEN);
        assert_eq!(rgb.red, 1.0);
        assert_eq!(rgb.green, 0.0);
    }

    #[test]
    fn cmyk_boundaries() {
        assert_eq!(rgb_to_cmyk(&Srgb::BLACK), Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(rgb_to_cmyk(&Srgb::WHITE), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(cmyk_to_rgb(&Cmyk::BLACK), Srgb::BLACK);
        assert_eq!(cmyk_to_rgb(&Cmyk::new(0.0, 0.0, 0.0, 0.0)), Srgb::WHITE);
    }

    #[test]
    fn test_rgb_to_cmyk() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component, Component)] = &[
            (255, 0, 0, 0.0, 1.0, 1.0, 0.0),
            (0, 255, 0, 1.0, 0.0, 1.0, 0.0),
            (0, 0, 255, 1.0, 1.0, 0.0, 0.0),
            (128, 128, 128, 0.0, 0.0, 0.0, 0.498),
            (210, 105, 30, 0.0, 0.5, 0.857, 0.176),
            (1, 0, 0, 0.0, 1.0, 1.0, 0.996),
        ];

        for &(r, g, b, c, m, y, k) in TESTS {
            let cmyk = rgb_to_cmyk(&Rgb8::new(r, g, b).to_srgb());
            assert_eq!(cmyk, Cmyk::new(c, m, y, k), "rgb({r}, {g}, {b})");
        }
    }

    #[test]
    fn black_threshold() {
        // Black at or above the threshold is pure black ink.
        assert_eq!(rgb_to_cmyk(&Srgb::new(0.00005, 0.0, 0.0)), Cmyk::BLACK);
        assert_eq!(rgb_to_cmyk(&Srgb::new(0.00009, 0.0, 0.00005)), Cmyk::BLACK);

        // Just below it the colored inks are kept, black still rounds to one.
        assert_eq!(
            rgb_to_cmyk(&Srgb::new(0.0002, 0.0, 0.0)),
            Cmyk::new(0.0, 1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn near_white_is_rounded_like_any_other_color() {
        // No black ink at all, the channels still get rounded.
        let cmyk = rgb_to_cmyk(&Rgb8::new(255, 128, 0).to_srgb());
        assert_eq!(cmyk, Cmyk::new(0.0, 0.498, 1.0, 0.0));

        let cmyk = rgb_to_cmyk(&Srgb::new(1.0, 0.99995, 0.12345));
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.877, 0.0));
    }

    #[test]
    fn cmyk_input_is_clamped() {
        assert_eq!(
            cmyk_to_rgb(&Cmyk::new(-1.0, 2.0, 0.5, -0.5)),
            cmyk_to_rgb(&Cmyk::new(0.0, 1.0, 0.5, 0.0))
        );
        assert_eq!(cmyk_to_rgb(&Cmyk::new(0.25, 0.5, 0.0, 0.5)), Srgb::new(0.375, 0.25, 0.5));
    }

    #[test]
    fn cmyk_round_trip() {
        // One of cyan, magenta or yellow is always zero for a color that
        // came out of `rgb_to_cmyk`; round trips are only defined for those.
        for k in 0..=10 {
            let black = k as Component / 20.0;
            for a in 0..=20 {
                for b in 0..=20 {
                    let a = a as Component / 20.0;
                    let b = b as Component / 20.0;
                    for cmyk in [
                        Cmyk::new(0.0, a, b, black),
                        Cmyk::new(a, 0.0, b, black),
                        Cmyk::new(a, b, 0.0, black),
                    ] {
                        let back = rgb_to_cmyk(&cmyk_to_rgb(&cmyk));
                        for (expected, actual) in cmyk.to_array().into_iter().zip(back.to_array()) {
                            assert_component_eq!(actual, expected, 0.002);
                        }
                    }
                }
            }
        }
    }
}
