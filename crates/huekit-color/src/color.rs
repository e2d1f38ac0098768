// SPDX-License-Identifier: MIT
//
// `Color`: one value, four representations.
//
// Callers hand huekit colors in whatever notation they have (a hex string
// from a picker, an HSL triple from a CSS variable, an OKLCH literal). The
// enum keeps the representation the value arrived in; conversions out of it
// are total.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hsl::{Hsl, hsl_to_unit, unit_to_hsl};
use crate::oklch::{Oklch, oklch_to_unit, unit_to_oklch};
use crate::rgb::{HexColor, Rgb};
use crate::xyz::{Lab, unit_to_xyz, xyz_to_lab};

/// A color in one of the supported representations.
///
/// # Examples
///
/// ```
/// use huekit_color::{Color, Hsl};
///
/// let violet: Color = "#7a3be0".parse().unwrap();
/// let hsl = violet.to_hsl();
/// assert_eq!(hsl.to_string(), "263 73% 55%");
///
/// let from_css: Color = "263 73% 55%".parse().unwrap();
/// assert_eq!(from_css, Color::Hsl(Hsl::new(263.0, 73.0, 55.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Hex(HexColor),
    Rgb(Rgb),
    Hsl(Hsl),
    Oklch(Oklch),
}

impl Color {
    /// Parse any accepted notation: `#rrggbb`, `H S% L%`, `H,S,L`, or
    /// `oklch(L C H)`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] when no notation matches.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return HexColor::parse(trimmed).map(Self::Hex);
        }
        if trimmed.starts_with("oklch(") {
            return Oklch::parse(trimmed).map(Self::Oklch);
        }
        Hsl::parse(trimmed).map(Self::Hsl).map_err(|_| {
            ColorError::invalid_color(s, "expected `#rrggbb`, `H S% L%`, `H,S,L` or `oklch(L C H)`")
        })
    }

    /// Parse, resolving any failure to black.
    #[must_use]
    pub fn parse_or_black(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to black");
            Self::Rgb(Rgb::BLACK)
        })
    }

    /// Unquantized gamma-encoded channels; may fall outside [0, 1] for
    /// out-of-gamut OKLCH values.
    fn to_unit(self) -> [f64; 3] {
        match self {
            Self::Hex(hex) => hex.rgb().to_unit(),
            Self::Rgb(rgb) => rgb.to_unit(),
            Self::Hsl(hsl) => hsl_to_unit(hsl),
            Self::Oklch(oklch) => oklch_to_unit(oklch),
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Hex(hex) => hex.rgb(),
            Self::Rgb(rgb) => rgb,
            other => Rgb::from_unit(other.to_unit()),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// HSL without an 8-bit round trip when the source is already HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        match self {
            Self::Hsl(hsl) => hsl,
            other => {
                let [r, g, b] = other.to_unit();
                unit_to_hsl([r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)])
            }
        }
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        match self {
            Self::Oklch(oklch) => oklch,
            other => unit_to_oklch(other.to_unit()),
        }
    }

    /// CIE L*a*b* (D65).
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let [r, g, b] = self.to_unit();
        xyz_to_lab(unit_to_xyz([r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]))
    }
}

impl Default for Color {
    /// Black.
    fn default() -> Self {
        Self::Rgb(Rgb::BLACK)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => fmt::Display::fmt(hex, f),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
            Self::Oklch(oklch) => fmt::Display::fmt(oklch, f),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl From<Oklch> for Color {
    fn from(oklch: Oklch) -> Self {
        Self::Oklch(oklch)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_picks_representation() {
        assert!(matches!(Color::parse("#102030"), Ok(Color::Hex(_))));
        assert!(matches!(Color::parse("10 20% 30%"), Ok(Color::Hsl(_))));
        assert!(matches!(Color::parse("10,20,30"), Ok(Color::Hsl(_))));
        assert!(matches!(Color::parse("oklch(0.5 0.1 200)"), Ok(Color::Oklch(_))));
    }

    #[test]
    fn parse_failure_keeps_original_input() {
        let err = Color::parse("chartreuse").unwrap_err();
        match err {
            ColorError::InvalidColor { input, .. } => assert_eq!(input, "chartreuse"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn parse_or_black_is_black() {
        assert_eq!(Color::parse_or_black("#zzzzzz").to_hex(), "#000000");
    }

    #[test]
    fn hsl_source_is_not_quantized() {
        let hsl = Hsl::new(12.25, 33.5, 47.75);
        assert_eq!(Color::Hsl(hsl).to_hsl(), hsl);
    }

    #[test]
    fn hex_to_everything() {
        let c = Color::parse("#ff0000").unwrap();
        assert_eq!(c.to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(c.to_hsl(), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(c.to_oklch().to_string(), "oklch(0.628 0.258 29)");
        assert!((c.to_lab().l - 53.24).abs() < 0.2);
    }

    #[test]
    fn display_follows_representation() {
        assert_eq!(Color::parse("#ABCDEF").unwrap().to_string(), "#abcdef");
        assert_eq!(Color::parse("1,2,3").unwrap().to_string(), "1 2% 3%");
        assert_eq!(Color::from(Rgb::new(1, 2, 3)).to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn out_of_gamut_oklch_clamps_to_rgb() {
        let wild = Color::Oklch(Oklch::new(0.7, 0.5, 140.0));
        let rgb = wild.to_rgb();
        assert_eq!(rgb.to_hex().len(), 7);
        let hsl = wild.to_hsl();
        assert!((0.0..=100.0).contains(&hsl.s) && (0.0..=100.0).contains(&hsl.l));
    }
}
