// SPDX-License-Identifier: MIT
//
// 8-bit sRGB, hex notation, and the sRGB transfer function.
//
// Everything downstream (HSL, XYZ, OKLCH) works on unit-range f64 channels.
// Quantization to u8 happens only when a value leaves the float pipeline
// through `Rgb::from_unit`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] for any other length or for a
    /// non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let bytes = digits.as_bytes();
        if bytes.len() != 6 {
            return Err(ColorError::invalid_color(
                s,
                format!("expected 6 hex digits, got {}", bytes.len()),
            ));
        }
        let channel = |i: usize| {
            parse_hex_byte(&bytes[i..i + 2])
                .ok_or_else(|| ColorError::invalid_color(s, "non-hex digit"))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as gamma-encoded values in [0, 1].
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Quantize unit-range channels, clamping anything out of gamut.
    #[must_use]
    pub fn from_unit([r, g, b]: [f64; 3]) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── HexColor ────────────────────────────────────────────────────────────────

/// A hex color that has already been validated.
///
/// Only constructible through parsing, so converting it onward is total.
/// Displays as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl HexColor {
    /// # Errors
    ///
    /// Same as [`Rgb::from_hex`].
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(s).map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

// ─── Free-function surface ───────────────────────────────────────────────────

/// # Errors
///
/// Returns [`ColorError::InvalidColor`] unless `s` is `#RRGGBB`.
pub fn hex_to_rgb(s: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(s)
}

#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

// ─── sRGB transfer function ──────────────────────────────────────────────────

/// Remove sRGB gamma from one channel.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply sRGB gamma to one linear channel.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // clamp keeps the value inside 0..=255 before the cast
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(hex_to_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hex_parsing_uppercase() {
        assert_eq!(hex_to_rgb("#7A3BE0").unwrap(), Rgb::new(122, 59, 224));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(hex_to_rgb("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn hex_parsing_rejects_wrong_length() {
        assert!(hex_to_rgb("#f80").is_err());
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#ff000080").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn hex_parsing_rejects_non_hex() {
        let err = hex_to_rgb("#gg0000").unwrap_err();
        assert!(matches!(err, ColorError::InvalidColor { .. }));
    }

    #[test]
    fn hex_parsing_rejects_multibyte_input() {
        // Six bytes, but not six hex digits.
        assert!(hex_to_rgb("#ééab").is_err());
    }

    #[test]
    fn hex_roundtrip_is_lowercase() {
        let rgb = hex_to_rgb("#C86432").unwrap();
        assert_eq!(rgb_to_hex(rgb), "#c86432");
    }

    #[test]
    fn from_unit_clamps_out_of_gamut() {
        assert_eq!(Rgb::from_unit([1.2, -0.3, 0.5]), Rgb::new(255, 0, 128));
    }

    #[test]
    fn unit_roundtrip_is_exact() {
        let rgb = Rgb::new(12, 200, 99);
        assert_eq!(Rgb::from_unit(rgb.to_unit()), rgb);
    }

    #[test]
    fn gamma_threshold_is_continuous() {
        let below = linear_to_srgb(0.003_130_8);
        let above = linear_to_srgb(0.003_130_9);
        assert!((below - above).abs() < 1e-5, "{below} vs {above}");
    }

    #[test]
    fn gamma_roundtrip() {
        for i in 0..=20 {
            let c = f64::from(i) / 20.0;
            let back = linear_to_srgb(srgb_to_linear(c));
            assert!((back - c).abs() < 1e-12, "{c} → {back}");
        }
    }

    #[test]
    fn hex_color_displays_normalized() {
        let hex = HexColor::parse("ABCDEF").unwrap();
        assert_eq!(hex.to_string(), "#abcdef");
        assert_eq!(hex.rgb(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    }
}
