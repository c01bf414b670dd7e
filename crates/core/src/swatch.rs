//! Swatches and contrast matrices built from a [`PaletteConfig`].
//!
//! A [`Swatch`] is one background shade, optionally annotated with its
//! contrast against a light and a dark text color. A [`ContrastMatrix`]
//! crosses every shade of one family (as text) with every shade of the other
//! (as background).

use std::fmt;
use std::str::FromStr;

use crate::contrast::{check_contrast, ContrastPolicy, ContrastVerdict};
use crate::error::ContrastError;
use crate::palette::{FamilyKind, PaletteConfig};
use serde::{Deserialize, Serialize};

/// Contrast of a swatch background against light and dark text, judged at
/// the default policy (AA, normal text).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwatchContrast {
    pub light: ContrastVerdict,
    pub dark: ContrastVerdict,
}

/// One shade of a family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub key: u16,
    pub color: String,
    /// `None` when no text colors were available to test against.
    pub contrast: Option<SwatchContrast>,
}

impl Swatch {
    /// Creates a swatch. With `text = Some((light, dark))` both contrasts are
    /// computed; with `None` the swatch is plain and the engine is not called.
    pub fn new(key: u16, color: &str, text: Option<(&str, &str)>) -> Result<Self, ContrastError> {
        let contrast = match text {
            Some((light, dark)) => {
                let policy = ContrastPolicy::default();
                Some(SwatchContrast {
                    light: check_contrast(color, light, policy)?,
                    dark: check_contrast(color, dark, policy)?,
                })
            }
            None => None,
        };
        Ok(Self {
            key,
            color: color.to_string(),
            contrast,
        })
    }
}

/// Every shade of family `kind`, tested against that family's own
/// `light_text` and `dark_text` shades.
///
/// If either text shade is missing from the family, the swatches come back
/// without contrast rather than failing.
pub fn family_swatches(
    config: &PaletteConfig,
    kind: FamilyKind,
) -> Result<Vec<Swatch>, ContrastError> {
    let family = config.family(kind);
    let light = family.color(config.light_text);
    let dark = family.color(config.dark_text);
    let text = light.as_deref().zip(dark.as_deref());

    family
        .shades()
        .map(|(key, color)| Swatch::new(key, &color, text))
        .collect()
}

/// Which family supplies text and which supplies backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pairing {
    /// Accent text on neutral backgrounds.
    #[default]
    AccentOnNeutral,
    /// Neutral text on accent backgrounds.
    NeutralOnAccent,
}

impl Pairing {
    pub fn as_str(self) -> &'static str {
        match self {
            Pairing::AccentOnNeutral => "accent-on-neutral",
            Pairing::NeutralOnAccent => "neutral-on-accent",
        }
    }

    /// Returns `(text, background)` families.
    pub fn families(self) -> (FamilyKind, FamilyKind) {
        match self {
            Pairing::AccentOnNeutral => (FamilyKind::Accent, FamilyKind::Neutral),
            Pairing::NeutralOnAccent => (FamilyKind::Neutral, FamilyKind::Accent),
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Pairing {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accent-on-neutral" => Ok(Pairing::AccentOnNeutral),
            "neutral-on-accent" => Ok(Pairing::NeutralOnAccent),
            _ => Err(ContrastError::UnknownPairing(s.to_string())),
        }
    }
}

/// One background shade under one text color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    pub background_key: u16,
    pub background: String,
    /// `None` in a plain matrix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<ContrastVerdict>,
}

/// One text shade across every background shade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub text_key: u16,
    pub text: String,
    pub cells: Vec<MatrixCell>,
}

/// Text shades of one family crossed with background shades of the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastMatrix {
    pub pairing: Pairing,
    /// `None` in a plain matrix.
    pub policy: Option<ContrastPolicy>,
    pub rows: Vec<MatrixRow>,
}

impl ContrastMatrix {
    /// Builds the matrix for `pairing`, judging each cell against `policy`.
    ///
    /// Rows and cells follow ascending shade keys.
    pub fn build(
        config: &PaletteConfig,
        pairing: Pairing,
        policy: ContrastPolicy,
    ) -> Result<Self, ContrastError> {
        let (text_kind, background_kind) = pairing.families();
        let backgrounds: Vec<(u16, String)> = config.family(background_kind).shades().collect();

        let rows = config
            .family(text_kind)
            .shades()
            .map(|(text_key, text)| -> Result<MatrixRow, ContrastError> {
                let cells = backgrounds
                    .iter()
                    .map(|(background_key, background)| -> Result<MatrixCell, ContrastError> {
                        Ok(MatrixCell {
                            background_key: *background_key,
                            background: background.clone(),
                            verdict: Some(check_contrast(background, &text, policy)?),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MatrixRow {
                    text_key,
                    text,
                    cells,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pairing,
            policy: Some(policy),
            rows,
        })
    }

    /// Builds the same grid as [`ContrastMatrix::build`] without contrast.
    /// Every cell is a plain color pair and the engine is not called.
    pub fn plain(config: &PaletteConfig, pairing: Pairing) -> Self {
        let (text_kind, background_kind) = pairing.families();
        let backgrounds: Vec<(u16, String)> = config.family(background_kind).shades().collect();

        let rows = config
            .family(text_kind)
            .shades()
            .map(|(text_key, text)| MatrixRow {
                text_key,
                text,
                cells: backgrounds
                    .iter()
                    .map(|(background_key, background)| MatrixCell {
                        background_key: *background_key,
                        background: background.clone(),
                        verdict: None,
                    })
                    .collect(),
            })
            .collect();

        Self {
            pairing,
            policy: None,
            rows,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Number of cells whose verdict is accessible. Always 0 for a plain
    /// matrix.
    pub fn pass_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .filter(|c| c.verdict.is_some_and(|v| v.accessible))
            .count()
    }
}
