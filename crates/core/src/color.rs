//! Color types and conversion functions.
//!
//! Provides `Srgb` (gamma-encoded) and `LinearRgb` (linear light) and the
//! pure conversions from a normalized [`Hsl`]: the HSL hexagon model into
//! sRGB, then per-channel linearization. All values are `f64` in `[0, 1]`.

use crate::hsl::Hsl;
use serde::Serialize;

/// Gamma-encoded sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear-light RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Linear segment cutoff of the sRGB transfer function as WCAG 2.x states it.
const SRGB_LINEAR_CUTOFF: f64 = 0.03928;

/// Converts a normalized HSL color to sRGB using the hexagon model.
///
/// Expects `hue` in `[0, 360)` and `saturation`/`lightness` in `[0, 1]`, as
/// produced by [`crate::hsl::parse_color`]. Alpha is ignored.
pub fn hsl_to_srgb(c: Hsl) -> Srgb {
    let (h, s, l) = (c.hue, c.saturation, c.lightness);
    if s == 0.0 {
        return Srgb { r: l, g: l, b: l };
    }

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = chroma * (1.0 - ((hp % 2.0) - 1.0).abs());

    // Sectors are half-open on the low end: hp == 1.0 lands in the second.
    let (r1, g1, b1) = match hp {
        hp if hp < 1.0 => (chroma, x, 0.0),
        hp if hp < 2.0 => (x, chroma, 0.0),
        hp if hp < 3.0 => (0.0, chroma, x),
        hp if hp < 4.0 => (0.0, x, chroma),
        hp if hp < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = l - chroma / 2.0;
    Srgb {
        r: r1 + m,
        g: g1 + m,
        b: b1 + m,
    }
}

/// Applies inverse sRGB gamma to a single component.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_CUTOFF {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma per channel.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Convenience: HSL to linear RGB via the chain HSL -> sRGB -> linear.
pub fn hsl_to_linear(c: Hsl) -> LinearRgb {
    srgb_to_linear(hsl_to_srgb(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsl::parse_color;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn srgb_of(input: &str) -> Srgb {
        hsl_to_srgb(parse_color(input).unwrap())
    }

    fn assert_srgb(c: Srgb, r: f64, g: f64, b: f64) {
        assert!(
            approx_eq(c.r, r) && approx_eq(c.g, g) && approx_eq(c.b, b),
            "expected ({r}, {g}, {b}), got ({}, {}, {})",
            c.r,
            c.g,
            c.b
        );
    }

    // -- HSL -> sRGB --

    #[test]
    fn achromatic_uses_lightness_for_all_channels() {
        assert_srgb(srgb_of("hsl(123, 0%, 40%)"), 0.4, 0.4, 0.4);
        assert_srgb(srgb_of("hsl(0, 0%, 100%)"), 1.0, 1.0, 1.0);
        assert_srgb(srgb_of("hsl(0, 0%, 0%)"), 0.0, 0.0, 0.0);
    }

    #[test]
    fn primary_and_secondary_hues() {
        assert_srgb(srgb_of("hsl(0, 100%, 50%)"), 1.0, 0.0, 0.0);
        assert_srgb(srgb_of("hsl(60, 100%, 50%)"), 1.0, 1.0, 0.0);
        assert_srgb(srgb_of("hsl(120, 100%, 50%)"), 0.0, 1.0, 0.0);
        assert_srgb(srgb_of("hsl(180, 100%, 50%)"), 0.0, 1.0, 1.0);
        assert_srgb(srgb_of("hsl(240, 100%, 50%)"), 0.0, 0.0, 1.0);
        assert_srgb(srgb_of("hsl(300, 100%, 50%)"), 1.0, 0.0, 1.0);
    }

    #[test]
    fn each_sector_assigns_channels_in_order() {
        // Midpoints of the six sectors at full saturation and half lightness:
        // x = 0.5 everywhere.
        assert_srgb(srgb_of("hsl(30, 100%, 50%)"), 1.0, 0.5, 0.0);
        assert_srgb(srgb_of("hsl(90, 100%, 50%)"), 0.5, 1.0, 0.0);
        assert_srgb(srgb_of("hsl(150, 100%, 50%)"), 0.0, 1.0, 0.5);
        assert_srgb(srgb_of("hsl(210, 100%, 50%)"), 0.0, 0.5, 1.0);
        assert_srgb(srgb_of("hsl(270, 100%, 50%)"), 0.5, 0.0, 1.0);
        assert_srgb(srgb_of("hsl(330, 100%, 50%)"), 1.0, 0.0, 0.5);
    }

    #[test]
    fn known_css_color() {
        // hsl(210, 50%, 40%) is rgb(51, 102, 153) in CSS.
        let c = srgb_of("hsl(210, 50%, 40%)");
        assert_eq!(c.to_hex(), "#336699");
    }

    #[test]
    fn lightness_offsets_all_channels() {
        // c = 0.5, m = 0.5 for l = 75%, s = 100%.
        assert_srgb(srgb_of("hsl(0, 100%, 75%)"), 1.0, 0.5, 0.5);
    }

    #[test]
    fn alpha_does_not_affect_conversion() {
        let opaque = srgb_of("hsl(200, 40%, 60%)");
        let translucent = srgb_of("hsla(200, 40%, 60%, 0.1)");
        assert_eq!(opaque, translucent);
    }

    // -- Linearization --

    #[test]
    fn linear_black_and_white_are_fixed_points() {
        assert!(approx_eq(srgb_component_to_linear(0.0), 0.0));
        assert!(approx_eq(srgb_component_to_linear(1.0), 1.0));
    }

    #[test]
    fn linear_cutoff_at_0_03928() {
        assert!(approx_eq(srgb_component_to_linear(0.03928), 0.03928 / 12.92));

        let above = 0.03929_f64;
        let expected = ((above + 0.055) / 1.055).powf(2.4);
        assert!(approx_eq(srgb_component_to_linear(above), expected));
    }

    #[test]
    fn mid_gray_linearizes_to_about_0_214() {
        let lin = srgb_component_to_linear(0.5);
        assert!((lin - 0.214).abs() < 1e-3, "got {lin}");
    }

    #[test]
    fn hsl_to_linear_composes_hexagon_then_gamma() {
        let c = parse_color("hsl(30, 100%, 50%)").unwrap();
        let lin = hsl_to_linear(c);
        assert!(approx_eq(lin.r, 1.0));
        assert!(approx_eq(lin.g, srgb_component_to_linear(0.5)));
        assert!(approx_eq(lin.b, 0.0));
    }

    // -- to_hex --

    #[test]
    fn to_hex_primaries() {
        assert_eq!(srgb_of("hsl(0, 100%, 50%)").to_hex(), "#ff0000");
        assert_eq!(srgb_of("hsl(0, 0%, 100%)").to_hex(), "#ffffff");
        assert_eq!(srgb_of("hsl(0, 0%, 0%)").to_hex(), "#000000");
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        let color = Srgb {
            r: 1.5,
            g: -0.1,
            b: 0.5,
        };
        assert_eq!(color.to_hex(), "#ff0080");
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn achromatic_is_independent_of_hue(
                h in -720.0_f64..720.0,
                l in 0.0_f64..=100.0,
            ) {
                let c = parse_color(&format!("hsl({h}, 0%, {l}%)")).unwrap();
                let rgb = hsl_to_srgb(c);
                // Lightness of 1% or less is read as a fraction.
                let expected = if l > 1.0 { l / 100.0 } else { l };
                prop_assert!((rgb.r - expected).abs() < 1e-9);
                prop_assert!((rgb.g - expected).abs() < 1e-9);
                prop_assert!((rgb.b - expected).abs() < 1e-9);
            }

            #[test]
            fn srgb_channels_stay_in_unit_range(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
            ) {
                let rgb = hsl_to_srgb(Hsl::new(h, s, l).unwrap());
                for v in [rgb.r, rgb.g, rgb.b] {
                    prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v), "channel {}", v);
                }
            }

            #[test]
            fn linear_channels_stay_in_unit_range(c in 0.0_f64..=1.0) {
                let lin = srgb_component_to_linear(c);
                prop_assert!((0.0..=1.0).contains(&lin), "{} -> {}", c, lin);
                prop_assert!(lin <= c);
            }
        }
    }
}
