//! WCAG 2.x contrast ratio and AA/AAA pass/fail verdicts.
//!
//! The ratio between two relative luminances is
//! `(lighter + 0.05) / (darker + 0.05)`, ranging from 1 (identical) to 21
//! (black on white). A [`ContrastPolicy`] selects the threshold a ratio must
//! reach:
//!
//! | level | large text | threshold |
//! |-------|------------|-----------|
//! | AA    | no         | 4.5       |
//! | AA    | yes        | 3.0       |
//! | AAA   | no         | 7.0       |
//! | AAA   | yes        | 4.5       |

use std::fmt;
use std::str::FromStr;

use crate::error::ContrastError;
use crate::hsl::parse_color;
use crate::luminance::luminance_of;
use serde::{Deserialize, Serialize};

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Both levels, weakest first.
    pub const ALL: [WcagLevel; 2] = [WcagLevel::Aa, WcagLevel::Aaa];

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for WcagLevel {
    type Err = ContrastError;

    /// Parses `"AA"` or `"AAA"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(WcagLevel::Aa),
            "AAA" => Ok(WcagLevel::Aaa),
            _ => Err(ContrastError::UnknownLevel(s.to_string())),
        }
    }
}

/// Which threshold a contrast ratio is checked against.
///
/// The default is AA for normal-size text (4.5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastPolicy {
    pub level: WcagLevel,
    pub large_text: bool,
}

impl ContrastPolicy {
    pub fn new(level: WcagLevel, large_text: bool) -> Self {
        Self { level, large_text }
    }

    /// Minimum contrast ratio this policy accepts.
    pub fn threshold(self) -> f64 {
        match (self.level, self.large_text) {
            (WcagLevel::Aa, false) => 4.5,
            (WcagLevel::Aa, true) => 3.0,
            (WcagLevel::Aaa, false) => 7.0,
            (WcagLevel::Aaa, true) => 4.5,
        }
    }

    /// Returns true if `ratio` meets this policy's threshold.
    pub fn accepts(self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }

    /// Every level / text-size combination, in table order.
    pub fn all() -> [ContrastPolicy; 4] {
        [
            ContrastPolicy::new(WcagLevel::Aa, false),
            ContrastPolicy::new(WcagLevel::Aa, true),
            ContrastPolicy::new(WcagLevel::Aaa, false),
            ContrastPolicy::new(WcagLevel::Aaa, true),
        ]
    }
}

/// A contrast ratio together with its pass/fail verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastVerdict {
    pub ratio: f64,
    pub accessible: bool,
}

impl ContrastVerdict {
    /// Judges an already computed ratio against `policy`.
    pub fn evaluate(ratio: f64, policy: ContrastPolicy) -> Self {
        Self {
            ratio,
            accessible: policy.accepts(ratio),
        }
    }
}

/// Contrast ratio between two relative luminances. Symmetric, always >= 1.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between a background and a foreground `hsl()` string.
///
/// Fails with `ContrastError::InvalidColorFormat` if either string does not
/// parse; the background is parsed first.
pub fn contrast_ratio_from_colors(bg: &str, fg: &str) -> Result<f64, ContrastError> {
    let bg = parse_color(bg)?;
    let fg = parse_color(fg)?;
    Ok(contrast_ratio(luminance_of(bg), luminance_of(fg)))
}

/// Returns true if text in `fg` over `bg` meets `policy`.
pub fn is_accessible_contrast(
    bg: &str,
    fg: &str,
    policy: ContrastPolicy,
) -> Result<bool, ContrastError> {
    contrast_ratio_from_colors(bg, fg).map(|ratio| policy.accepts(ratio))
}

/// Computes the ratio and the verdict for `policy` in one pass.
pub fn check_contrast(
    bg: &str,
    fg: &str,
    policy: ContrastPolicy,
) -> Result<ContrastVerdict, ContrastError> {
    contrast_ratio_from_colors(bg, fg).map(|ratio| ContrastVerdict::evaluate(ratio, policy))
}
