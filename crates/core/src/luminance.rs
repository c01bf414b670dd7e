//! WCAG relative luminance.

use crate::color::{hsl_to_linear, LinearRgb};
use crate::hsl::Hsl;

/// Relative luminance of a linear-light color (ITU-R BT.709 weights).
pub fn relative_luminance(c: LinearRgb) -> f64 {
    0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b
}

/// Relative luminance of a normalized HSL color.
pub fn luminance_of(c: Hsl) -> f64 {
    relative_luminance(hsl_to_linear(c))
}
