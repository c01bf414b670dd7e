//! Parsing and normalization of `hsl()` / `hsla()` color strings.
//!
//! Accepted grammar (keyword case-insensitive):
//!
//! ```text
//! hsl(H[deg|°], S[%], L[%])
//! hsla(H[deg|°], S[%], L[%], A)
//! ```
//!
//! Every number is a signed decimal (`[+-]?\d*\.?\d+`, no exponent) and
//! whitespace is allowed around every token. The first `hsl(...)` group found
//! in the input is used.
//!
//! Parsing only validates and normalizes: hue is wrapped into `[0, 360)`,
//! saturation and lightness are read as percentages when greater than 1 and
//! clamped into `[0, 1]`. Alpha is carried through untouched.

use std::fmt;
use std::str::FromStr;

use crate::error::ContrastError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A parsed, normalized HSL color.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `lightness` are in
/// `[0, 1]`. Build through [`parse_color`] or [`Hsl::new`] to get those
/// guarantees; the conversion functions assume them.
///
/// Serializes as its canonical `hsl(...)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: Option<f64>,
}

impl Hsl {
    /// Creates a color from raw components, applying the same normalization
    /// as the parser.
    ///
    /// Returns `ContrastError::InvalidColorFormat` when any component is not
    /// finite, as [`parse_color`] does.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ContrastError> {
        if !(hue.is_finite() && saturation.is_finite() && lightness.is_finite()) {
            return Err(ContrastError::InvalidColorFormat(format!(
                "hsl({hue}, {saturation}, {lightness})"
            )));
        }
        Ok(Self {
            hue: normalize_hue(hue),
            saturation: normalize_unit(saturation),
            lightness: normalize_unit(lightness),
            alpha: None,
        })
    }

    /// Returns a copy carrying the given alpha value.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }
}

/// Wraps a hue angle into `[0, 360)`, including negative inputs.
pub fn normalize_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

/// Normalizes a saturation or lightness component into `[0, 1]`.
///
/// Values greater than 1 are read as percentages. A bare `1` therefore means
/// 100%, never 1%.
pub fn normalize_unit(v: f64) -> f64 {
    let v = if v > 1.0 { v / 100.0 } else { v };
    v.clamp(0.0, 1.0)
}

/// Parses an `hsl()`/`hsla()` color string into a normalized [`Hsl`].
///
/// Returns `ContrastError::InvalidColorFormat` carrying the input when no
/// `hsl(...)` group matches, or when hue, saturation or lightness is not a
/// finite number.
pub fn parse_color(input: &str) -> Result<Hsl, ContrastError> {
    let invalid = || ContrastError::InvalidColorFormat(input.to_string());

    let raw = input
        .char_indices()
        .filter_map(|(i, _)| match_hsl(&input[i..]))
        .next()
        .ok_or_else(invalid)?;

    if !(raw.h.is_finite() && raw.s.is_finite() && raw.l.is_finite()) {
        return Err(invalid());
    }

    Ok(Hsl {
        hue: normalize_hue(raw.h),
        saturation: normalize_unit(raw.s),
        lightness: normalize_unit(raw.l),
        alpha: raw.a,
    })
}

/// Components exactly as written, before normalization.
struct RawHsl {
    h: f64,
    s: f64,
    l: f64,
    a: Option<f64>,
}

/// Tries to match the grammar at the very start of `s`.
fn match_hsl(s: &str) -> Option<RawHsl> {
    let mut cur = Cursor { rest: s };

    if !cur.eat_ignore_case("hsl") {
        return None;
    }
    cur.eat_ignore_case("a");
    cur.expect('(')?;

    cur.skip_ws();
    let h = cur.number()?;
    cur.skip_ws();
    if !cur.eat_ignore_case("deg") {
        cur.eat('°');
    }
    cur.skip_ws();
    cur.expect(',')?;

    cur.skip_ws();
    let s = cur.number()?;
    cur.eat('%');
    cur.skip_ws();
    cur.expect(',')?;

    cur.skip_ws();
    let l = cur.number()?;
    cur.eat('%');
    cur.skip_ws();

    let a = if cur.eat(',') {
        cur.skip_ws();
        let a = cur.number()?;
        cur.skip_ws();
        Some(a)
    } else {
        None
    };
    cur.expect(')')?;

    Some(RawHsl { h, s, l, a })
}

struct Cursor<'a> {
    rest: &'a str,
}

impl Cursor<'_> {
    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, c: char) -> Option<()> {
        self.eat(c).then_some(())
    }

    fn eat_ignore_case(&mut self, word: &str) -> bool {
        let matches = self
            .rest
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word));
        if matches {
            self.rest = &self.rest[word.len()..];
        }
        matches
    }

    /// Consumes `[+-]?\d*\.?\d+` and returns its value.
    ///
    /// Digit runs too long for `f64` come back as infinity; callers check
    /// finiteness.
    fn number(&mut self) -> Option<f64> {
        let bytes = self.rest.as_bytes();
        let digits_from = |start: usize| {
            bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let int_digits = digits_from(end);
        end += int_digits;

        if bytes.get(end) == Some(&b'.') {
            let frac_digits = digits_from(end + 1);
            if frac_digits > 0 {
                end += 1 + frac_digits;
            } else if int_digits == 0 {
                return None;
            }
        } else if int_digits == 0 {
            return None;
        }

        let value = self.rest[..end].parse::<f64>().ok()?;
        self.rest = &self.rest[end..];
        Some(value)
    }
}

impl FromStr for Hsl {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl fmt::Display for Hsl {
    /// Writes the canonical `hsl(H, S%, L%)` form, or `hsla(...)` when alpha
    /// is present. Output re-parses to the same color as long as alpha is
    /// finite; an infinite alpha is written as `inf`, which the grammar does
    /// not accept.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = round4(self.hue);
        let s = unit_to_css(self.saturation);
        let l = unit_to_css(self.lightness);
        match self.alpha {
            Some(a) => write!(f, "hsla({h}, {s}, {l}, {a})"),
            None => write!(f, "hsl({h}, {s}, {l})"),
        }
    }
}

fn round4(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

/// Percentages of 1% or less would re-parse as fractions, so those are
/// written as bare fractions instead.
fn unit_to_css(v: f64) -> String {
    let pct = round4(v * 100.0);
    if pct > 1.0 {
        format!("{pct}%")
    } else {
        format!("{}", round4(v))
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}
