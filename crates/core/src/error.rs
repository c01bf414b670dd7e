//! Error types for the hsl-contrast core.

use thiserror::Error;

/// Errors produced by color parsing, contrast checks and palette lookups.
#[derive(Debug, Error)]
pub enum ContrastError {
    /// A color string did not match the `hsl()`/`hsla()` grammar, or one of
    /// its hue, saturation or lightness components was not a finite number.
    /// Carries the offending input verbatim.
    #[error("invalid color format (expected hsl/hsla): {0}")]
    InvalidColorFormat(String),

    /// A WCAG level name other than `AA` or `AAA` was supplied.
    #[error("unknown WCAG level: {0} (expected AA or AAA)")]
    UnknownLevel(String),

    /// A family name other than `neutral` or `accent` was supplied.
    #[error("unknown color family: {0} (expected neutral or accent)")]
    UnknownFamily(String),

    /// A pairing name other than `accent-on-neutral` or `neutral-on-accent`.
    #[error("unknown pairing: {0} (expected accent-on-neutral or neutral-on-accent)")]
    UnknownPairing(String),

    /// A palette lookup named a lightness key the family does not define.
    #[error("unknown shade {key} in {family} family")]
    UnknownShade { family: String, key: u16 },

    /// A palette configuration could not be used.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// An I/O operation failed (e.g. reading a palette file).
    #[error("I/O error: {0}")]
    Io(String),
}
