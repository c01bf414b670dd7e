#![deny(unsafe_code)]
//! HSL color contrast engine.
//!
//! A single forward pipeline, every stage a pure function:
//! `hsl()` string -> [`Hsl`] -> [`Srgb`] -> [`LinearRgb`] -> relative
//! luminance -> contrast ratio -> WCAG AA/AAA verdict.
//!
//! On top of the engine, [`palette`] and [`swatch`] model the neutral and
//! accent color families and the swatch grids and contrast matrices built
//! from them.

pub mod color;
pub mod contrast;
pub mod error;
pub mod hsl;
pub mod luminance;
pub mod palette;
pub mod swatch;

pub use color::{hsl_to_linear, hsl_to_srgb, LinearRgb, Srgb};
pub use contrast::{
    check_contrast, contrast_ratio, contrast_ratio_from_colors, is_accessible_contrast,
    ContrastPolicy, ContrastVerdict, WcagLevel,
};
pub use error::ContrastError;
pub use hsl::{parse_color, Hsl};
pub use luminance::{luminance_of, relative_luminance};
pub use palette::{Family, FamilyKind, PaletteConfig};
pub use swatch::{family_swatches, ContrastMatrix, Pairing, Swatch, SwatchContrast};
