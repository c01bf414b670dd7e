//! Neutral and accent color families and their JSON configuration.
//!
//! A [`Family`] is one hue and saturation shared by a scale of named
//! lightness shades (`30`, `500`, `970`, ...). A [`PaletteConfig`] holds the
//! neutral and accent families plus the two shade keys each family uses as
//! its own light and dark text when rendering swatches.
//!
//! Configuration values are percentages, like the editing controls that
//! produce them: hue in degrees, saturation and lightness in `0..=100`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ContrastError;
use crate::hsl::Hsl;
use serde::{Deserialize, Serialize};

/// One hue/saturation with a scale of lightness shades.
///
/// Shade keys iterate in ascending numeric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: BTreeMap<u16, f64>,
}

impl Family {
    /// Creates a family from `(key, lightness percent)` pairs.
    pub fn new(hue: f64, saturation: f64, shades: &[(u16, f64)]) -> Self {
        Self {
            hue,
            saturation,
            lightness: shades.iter().copied().collect(),
        }
    }

    /// Returns the shade `key` as a normalized color.
    ///
    /// Components are clamped as in [`Family::clamped`] before conversion, so
    /// out-of-range or NaN values set directly on the family still render
    /// inside the valid range.
    pub fn shade(&self, key: u16) -> Option<Hsl> {
        let &l = self.lightness.get(&key)?;
        // Clamped components are always finite.
        Hsl::new(
            clamp_or_zero(self.hue, 360.0),
            clamp_or_zero(self.saturation, 100.0) / 100.0,
            clamp_or_zero(l, 100.0) / 100.0,
        )
        .ok()
    }

    /// Returns the shade `key` as an `hsl()` string the engine accepts.
    pub fn color(&self, key: u16) -> Option<String> {
        self.shade(key).map(|c| c.to_string())
    }

    /// Every shade as `(key, hsl() string)`, in ascending key order.
    pub fn shades(&self) -> impl Iterator<Item = (u16, String)> + '_ {
        self.lightness.keys().filter_map(|&k| Some((k, self.color(k)?)))
    }

    /// Returns a copy with hue clamped to `[0, 360]` and saturation and
    /// lightness clamped to `[0, 100]`.
    pub fn clamped(&self) -> Self {
        Self {
            hue: clamp_or_zero(self.hue, 360.0),
            saturation: clamp_or_zero(self.saturation, 100.0),
            lightness: self
                .lightness
                .iter()
                .map(|(&k, &l)| (k, clamp_or_zero(l, 100.0)))
                .collect(),
        }
    }
}

/// Clamps into `[0, max]`; NaN becomes 0.
fn clamp_or_zero(v: f64, max: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, max)
    }
}

/// Selects one of the two families of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    Neutral,
    Accent,
}

impl FamilyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FamilyKind::Neutral => "neutral",
            FamilyKind::Accent => "accent",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FamilyKind {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutral" => Ok(FamilyKind::Neutral),
            "accent" => Ok(FamilyKind::Accent),
            _ => Err(ContrastError::UnknownFamily(s.to_string())),
        }
    }
}

/// Shade keys of the built-in families, lightest first.
const DEFAULT_KEYS: [u16; 13] = [30, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950, 970];

const NEUTRAL_LIGHTNESS: [f64; 13] = [
    98.0, 96.0, 92.0, 84.0, 72.0, 60.0, 48.0, 38.0, 28.0, 20.0, 14.0, 10.0, 6.0,
];

const ACCENT_LIGHTNESS: [f64; 13] = [
    97.0, 94.0, 88.0, 78.0, 68.0, 58.0, 50.0, 42.0, 34.0, 26.0, 18.0, 12.0, 8.0,
];

fn default_shades(lightness: &[f64; 13]) -> BTreeMap<u16, f64> {
    DEFAULT_KEYS.iter().copied().zip(lightness.iter().copied()).collect()
}

/// Neutral and accent families plus the text shade keys.
///
/// Missing fields in JSON fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub neutral: Family,
    pub accent: Family,
    /// Shade key used as light text on a family's swatches.
    pub light_text: u16,
    /// Shade key used as dark text on a family's swatches.
    pub dark_text: u16,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            neutral: Family {
                hue: 220.0,
                saturation: 10.0,
                lightness: default_shades(&NEUTRAL_LIGHTNESS),
            },
            accent: Family {
                hue: 220.0,
                saturation: 80.0,
                lightness: default_shades(&ACCENT_LIGHTNESS),
            },
            light_text: 30,
            dark_text: 970,
        }
    }
}

impl PaletteConfig {
    /// Parses a configuration from JSON, clamps every family into range and
    /// validates it.
    pub fn from_json(json: &str) -> Result<Self, ContrastError> {
        let config: PaletteConfig = serde_json::from_str(json)
            .map_err(|e| ContrastError::InvalidPalette(format!("invalid palette JSON: {e}")))?;
        let config = config.clamped();
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ContrastError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ContrastError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Returns the requested family.
    pub fn family(&self, kind: FamilyKind) -> &Family {
        match kind {
            FamilyKind::Neutral => &self.neutral,
            FamilyKind::Accent => &self.accent,
        }
    }

    /// Returns shade `key` of family `kind` as an `hsl()` string.
    ///
    /// Returns `ContrastError::UnknownShade` if the family has no such key.
    pub fn color(&self, kind: FamilyKind, key: u16) -> Result<String, ContrastError> {
        self.family(kind)
            .color(key)
            .ok_or_else(|| ContrastError::UnknownShade {
                family: kind.to_string(),
                key,
            })
    }

    /// Returns a copy with both families clamped into range.
    pub fn clamped(&self) -> Self {
        Self {
            neutral: self.neutral.clamped(),
            accent: self.accent.clamped(),
            ..self.clone()
        }
    }

    /// Checks that each family defines at least one shade.
    pub fn validate(&self) -> Result<(), ContrastError> {
        for kind in [FamilyKind::Neutral, FamilyKind::Accent] {
            if self.family(kind).lightness.is_empty() {
                return Err(ContrastError::InvalidPalette(format!(
                    "{kind} family requires at least 1 shade"
                )));
            }
        }
        Ok(())
    }
}
