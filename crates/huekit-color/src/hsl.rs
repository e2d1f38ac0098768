// SPDX-License-Identifier: MIT
//
// The canonical HSL triple and its one parser/formatter.
//
// Every component that reads or writes HSL text goes through this module.
// Two grammars are accepted:
//
//   "291 80% 45%"   spaced, percent-suffixed (CSS variable form)
//   "291,80,45"     compact, used inside encoded theme payloads
//
// Components are stored unrounded; rounding to whole numbers happens only in
// `Display` and `to_compact`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorError;
use crate::oklch::{Oklch, hsl_to_oklch};
use crate::rgb::Rgb;

const NUMBER: &str = r"(-?[0-9]*\.?[0-9]+)";

static SPACED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*{NUMBER}(?:deg)?\s+{NUMBER}%\s+{NUMBER}%\s*$"))
        .expect("spaced HSL grammar is a valid regex")
});

static COMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*{NUMBER}\s*,\s*{NUMBER}\s*,\s*{NUMBER}\s*$"))
        .expect("compact HSL grammar is a valid regex")
});

/// An HSL color: hue in degrees [0, 360), saturation and lightness as
/// percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        l: 0.0,
    };

    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        l: 100.0,
    };

    /// Build a triple, wrapping the hue into [0, 360) and clamping s/l into
    /// [0, 100].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Same hue and saturation, different lightness (clamped).
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: clamp_percent(l),
            ..self
        }
    }

    /// Same hue and lightness, different saturation (clamped).
    #[inline]
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: clamp_percent(s),
            ..self
        }
    }

    /// Whole-number components, the precision every serialized form uses.
    #[must_use]
    pub fn rounded(self) -> Self {
        let h = self.h.round();
        Self {
            h: if h >= 360.0 { 0.0 } else { h + 0.0 },
            s: self.s.round() + 0.0,
            l: self.l.round() + 0.0,
        }
    }

    /// Parse either `"H S% L%"` or `"H,S,L"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] when neither grammar matches or
    /// when saturation/lightness fall outside [0, 100].
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let caps = COMPACT
            .captures(s)
            .or_else(|| SPACED.captures(s))
            .ok_or_else(|| ColorError::invalid_color(s, "expected `H S% L%` or `H,S,L`"))?;

        let num = |i: usize| {
            caps[i]
                .parse::<f64>()
                .map_err(|e| ColorError::invalid_color(s, e.to_string()))
        };
        let (h, sat, light) = (num(1)?, num(2)?, num(3)?);

        if !(0.0..=100.0).contains(&sat) {
            return Err(ColorError::invalid_color(s, "saturation outside 0-100"));
        }
        if !(0.0..=100.0).contains(&light) {
            return Err(ColorError::invalid_color(s, "lightness outside 0-100"));
        }
        Ok(Self::new(h, sat, light))
    }

    /// Parse, resolving any failure to black.
    #[must_use]
    pub fn parse_or_black(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to black");
            Self::BLACK
        })
    }

    /// `"H,S,L"` with whole-number components.
    #[must_use]
    pub fn to_compact(self) -> String {
        let Self { h, s, l } = self.rounded();
        format!("{h},{s},{l}")
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self)
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        hsl_to_oklch(self)
    }
}

impl fmt::Display for Hsl {
    /// `"H S% L%"` with whole-number components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { h, s, l } = self.rounded();
        write!(f, "{h} {s}% {l}%")
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Gamma-encoded unit sRGB → HSL. Gray inputs get `h = 0`, `s = 0`.
#[must_use]
pub fn unit_to_hsl([r, g, b]: [f64; 3]) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let delta = max - min;
    if delta <= f64::EPSILON {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if (max - r).abs() <= f64::EPSILON {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() <= f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
}

/// HSL → gamma-encoded unit sRGB, unquantized.
#[must_use]
pub fn hsl_to_unit(hsl: Hsl) -> [f64; 3] {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s <= 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = 2.0f64.mul_add(l, -q);

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    unit_to_hsl(rgb.to_unit())
}

#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    Rgb::from_unit(hsl_to_unit(hsl))
}

/// # Errors
///
/// Returns [`ColorError::InvalidColor`] unless `s` is `#RRGGBB`.
pub fn hex_to_hsl(s: &str) -> Result<Hsl, ColorError> {
    Rgb::from_hex(s).map(rgb_to_hsl)
}

/// Like [`hex_to_hsl`], but a malformed input resolves to black.
#[must_use]
pub fn hex_to_hsl_or_black(s: &str) -> Hsl {
    hex_to_hsl(s).unwrap_or_else(|err| {
        tracing::debug!(%err, "falling back to black");
        Hsl::BLACK
    })
}

/// Lowercase `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl_to_rgb(hsl).to_hex()
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Wrap a hue angle into [0, 360). NaN becomes 0.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_spaced_form() {
        assert_eq!(Hsl::parse("291 80% 45%").unwrap(), Hsl::new(291.0, 80.0, 45.0));
    }

    #[test]
    fn parse_compact_form() {
        assert_eq!(Hsl::parse("291,80,45").unwrap(), Hsl::new(291.0, 80.0, 45.0));
    }

    #[test]
    fn both_forms_share_one_core() {
        let a = Hsl::parse("12.5 33.3% 71%").unwrap();
        let b = Hsl::parse("12.5,33.3,71").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_tolerates_whitespace_and_deg() {
        assert_eq!(
            Hsl::parse("  200deg   10%  4% ").unwrap(),
            Hsl::new(200.0, 10.0, 4.0)
        );
        assert_eq!(Hsl::parse(" 200 , 10 , 4 ").unwrap(), Hsl::new(200.0, 10.0, 4.0));
    }

    #[test]
    fn parse_wraps_hue() {
        assert_eq!(Hsl::parse("-30 50% 50%").unwrap().h, 330.0);
        assert_eq!(Hsl::parse("360,50,50").unwrap().h, 0.0);
    }

    #[test]
    fn parse_rejects_out_of_range_percentages() {
        assert!(Hsl::parse("10 101% 50%").is_err());
        assert!(Hsl::parse("10,50,-1").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "red", "10 50 50", "10% 50% 50%", "10,50", "1,2,3,4"] {
            assert!(
                matches!(Hsl::parse(bad), Err(ColorError::InvalidColor { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn parse_or_black_falls_back() {
        assert_eq!(Hsl::parse_or_black("nope"), Hsl::BLACK);
        assert_eq!(Hsl::BLACK.to_string(), "0 0% 0%");
    }

    #[test]
    fn display_and_compact_round_to_integers() {
        let hsl = Hsl::new(12.6, 33.4, 71.5);
        assert_eq!(hsl.to_string(), "13 33% 72%");
        assert_eq!(hsl.to_compact(), "13,33,72");
    }

    #[test]
    fn rounding_wraps_359_point_6() {
        assert_eq!(Hsl::new(359.6, 10.0, 10.0).to_compact(), "0,10,10");
    }

    #[test]
    fn achromatic_gray_has_zero_hue() {
        let hsl = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(!hsl.h.is_nan() && !hsl.s.is_nan());
        assert!((hsl.l - 50.196).abs() < 0.01, "l: {}", hsl.l);
    }

    #[test]
    fn black_and_white_are_achromatic() {
        assert_eq!(rgb_to_hsl(Rgb::BLACK), Hsl::BLACK);
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::WHITE);
    }

    #[test]
    fn zero_saturation_converts_to_gray() {
        assert_eq!(hsl_to_rgb(Hsl::new(200.0, 0.0, 50.0)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn primaries_convert() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn magenta_side_of_the_wheel() {
        // max = r with g < b lands in the last sector.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!((hsl.h - 329.9).abs() < 0.1, "h: {}", hsl.h);
    }

    #[test]
    fn hex_hsl_hex_roundtrip() {
        let hsl = hex_to_hsl("#7A3BE0").unwrap();
        assert_eq!(hsl_to_hex(hsl), "#7a3be0");
    }

    #[test]
    fn hex_to_hsl_reports_invalid() {
        assert!(hex_to_hsl("#7A3BE").is_err());
        assert_eq!(hex_to_hsl_or_black("#7A3BE"), Hsl::BLACK);
    }

    #[test]
    fn new_clamps_and_wraps() {
        assert_eq!(Hsl::new(725.0, 140.0, -5.0), Hsl::new(5.0, 100.0, 0.0));
        assert_eq!(Hsl::new(f64::NAN, 10.0, 10.0).h, 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_byte_triple_roundtrips_through_hsl(r: u8, g: u8, b: u8) {
                let rgb = Rgb::new(r, g, b);
                prop_assert_eq!(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
            }

            #[test]
            fn hue_is_never_nan(r: u8, g: u8, b: u8) {
                let hsl = rgb_to_hsl(Rgb::new(r, g, b));
                prop_assert!(hsl.h.is_finite() && (0.0..360.0).contains(&hsl.h));
            }

            #[test]
            fn compact_and_spaced_parse_alike(h in 0u16..360, s in 0u8..=100, l in 0u8..=100) {
                let spaced = Hsl::parse(&format!("{h} {s}% {l}%")).unwrap();
                let compact = Hsl::parse(&format!("{h},{s},{l}")).unwrap();
                prop_assert_eq!(spaced, compact);
                prop_assert_eq!(spaced.to_string(), format!("{h} {s}% {l}%"));
            }
        }
    }
}
