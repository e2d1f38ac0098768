// SPDX-License-Identifier: MIT
//
// OKLCH, the cylindrical form of Björn Ottosson's Oklab.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Pipeline:
//
//   sRGB ↔ linear sRGB ↔ XYZ (D65) ↔ LMS ↔ Oklab ↔ OKLCH
//
// OKLCH is used only for final CSS output, never for palette derivation.
// Values stay unrounded until `Display`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorError;
use crate::hsl::{Hsl, hsl_to_unit};
use crate::rgb::Rgb;
use crate::xyz::{Xyz, unit_to_xyz, xyz_to_unit};

/// Chroma below this is treated as gray and reported with hue 0.
const ACHROMATIC_CHROMA: f64 = 4e-4;

static OKLCH_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*oklch\(\s*([0-9]*\.?[0-9]+)\s+([0-9]*\.?[0-9]+)\s+(-?[0-9]*\.?[0-9]+)(?:deg)?\s*\)\s*$")
        .expect("OKLCH grammar is a valid regex")
});

/// A color in OKLCH space.
///
/// - `l`: lightness, 0.0 to 1.0
/// - `c`: chroma, 0.0 to ~0.37 for sRGB colors
/// - `h`: hue angle in degrees, [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Parse CSS `oklch(L C H)`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] when `s` is not in that form.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let caps = OKLCH_FUNCTION
            .captures(s)
            .ok_or_else(|| ColorError::invalid_color(s, "expected `oklch(L C H)`"))?;
        let num = |i: usize| {
            caps[i]
                .parse::<f64>()
                .map_err(|e| ColorError::invalid_color(s, e.to_string()))
        };
        Ok(Self::new(num(1)?, num(2)?, num(3)?.rem_euclid(360.0)))
    }

    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }
}

impl fmt::Display for Oklch {
    /// `oklch(0.628 0.258 29)`: 3 decimals for l/c, whole degrees for h.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.l.clamp(0.0, 1.0);
        let c = self.c.max(0.0);
        let h = if self.is_achromatic() {
            0.0
        } else {
            let h = self.h.round();
            if h >= 360.0 { 0.0 } else { h + 0.0 }
        };
        write!(f, "oklch({l:.3} {c:.3} {h})")
    }
}

impl FromStr for Oklch {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── XYZ ↔ Oklab ─────────────────────────────────────────────────────────────

fn xyz_to_oklab(xyz: Xyz) -> (f64, f64, f64) {
    let Xyz { x, y, z } = xyz;

    // XYZ → LMS (M1)
    let l = (-0.128_859_713_7f64).mul_add(z, 0.818_933_010_1f64.mul_add(x, 0.361_866_742_4 * y));
    let m = 0.036_145_638_7f64.mul_add(z, 0.032_984_543_6f64.mul_add(x, 0.929_311_871_5 * y));
    let s = 0.633_851_707f64.mul_add(z, 0.048_200_301_8f64.mul_add(x, 0.264_366_269_1 * y));

    let (l_, m_, s_) = (l.cbrt(), m.cbrt(), s.cbrt());

    // LMS' → Oklab (M2)
    (
        (-0.004_072_046_8f64).mul_add(s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_)),
        0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_))),
        (-0.808_675_766f64).mul_add(s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_)),
    )
}

fn oklab_to_xyz(l_ok: f64, a: f64, b: f64) -> Xyz {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = (-0.063_854_172_8f64).mul_add(b, (-0.105_561_345_8f64).mul_add(a, l_ok));
    let s_ = (-1.291_485_548f64).mul_add(b, (-0.089_484_177_5f64).mul_add(a, l_ok));

    let (l, m, s) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);

    Xyz {
        x: 0.281_256_149f64.mul_add(s, 1.227_013_851_1f64.mul_add(l, -(0.557_799_980_7 * m))),
        y: (-0.071_676_678_7f64).mul_add(s, (-0.040_580_178_4f64).mul_add(l, 1.112_256_869_6 * m)),
        z: 1.586_163_220_4f64.mul_add(s, (-0.076_381_284_5f64).mul_add(l, -(0.421_481_978_4 * m))),
    }
}

// ─── Composite conversions ───────────────────────────────────────────────────

/// Gamma-encoded unit sRGB → OKLCH.
#[must_use]
pub fn unit_to_oklch(rgb: [f64; 3]) -> Oklch {
    let (l, a, b) = xyz_to_oklab(unit_to_xyz(rgb));
    let c = a.hypot(b);
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    };
    Oklch { l, c, h }
}

/// OKLCH → gamma-encoded unit sRGB. May fall outside [0, 1].
#[must_use]
pub fn oklch_to_unit(oklch: Oklch) -> [f64; 3] {
    let h = oklch.h.to_radians();
    let (a, b) = (oklch.c * h.cos(), oklch.c * h.sin());
    xyz_to_unit(oklab_to_xyz(oklch.l, a, b))
}

#[must_use]
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    unit_to_oklch(rgb.to_unit())
}

/// OKLCH → 8-bit sRGB, clamped into gamut.
#[must_use]
pub fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    Rgb::from_unit(oklch_to_unit(oklch))
}

/// HSL → OKLCH without quantizing through 8-bit RGB.
#[must_use]
pub fn hsl_to_oklch(hsl: Hsl) -> Oklch {
    unit_to_oklch(hsl_to_unit(hsl))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hue_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        if d > 180.0 { 360.0 - d } else { d }
    }

    #[test]
    fn black_is_zero_lightness() {
        let black = rgb_to_oklch(Rgb::BLACK);
        assert!(approx_eq(black.l, 0.0, 1e-3));
        assert!(approx_eq(black.c, 0.0, 1e-3));
        assert_eq!(black.h, 0.0);
    }

    #[test]
    fn white_is_full_lightness() {
        let white = rgb_to_oklch(Rgb::WHITE);
        assert!(approx_eq(white.l, 1.0, 1e-3), "l: {}", white.l);
        assert!(white.is_achromatic(), "c: {}", white.c);
        assert_eq!(white.h, 0.0);
    }

    #[test]
    fn gray_has_no_chroma_and_zero_hue() {
        let gray = rgb_to_oklch(Rgb::new(128, 128, 128));
        assert!(gray.is_achromatic(), "c: {}", gray.c);
        assert_eq!(gray.h, 0.0);
        assert!(!gray.h.is_nan());
    }

    #[test]
    fn red_known_value() {
        // CSS Color 4 gives oklch(0.628 0.258 29.2) for #ff0000.
        let red = rgb_to_oklch(Rgb::new(255, 0, 0));
        assert!(approx_eq(red.l, 0.628, 0.005), "l: {}", red.l);
        assert!(approx_eq(red.c, 0.258, 0.005), "c: {}", red.c);
        assert!(hue_diff(red.h, 29.2) < 1.0, "h: {}", red.h);
    }

    #[test]
    fn rgb_roundtrip() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(122, 59, 224),
            Rgb::new(250, 250, 249),
            Rgb::BLACK,
            Rgb::WHITE,
        ] {
            assert_eq!(oklch_to_rgb(rgb_to_oklch(rgb)), rgb);
        }
    }

    #[test]
    fn display_rounds_only_at_serialization() {
        let c = Oklch::new(0.627_955, 0.257_683, 29.234);
        assert_eq!(c.to_string(), "oklch(0.628 0.258 29)");
        // The value itself is untouched.
        assert!(approx_eq(c.l, 0.627_955, 1e-12));
    }

    #[test]
    fn display_wraps_hue_and_drops_gray_hue() {
        assert_eq!(Oklch::new(0.5, 0.1, 359.7).to_string(), "oklch(0.500 0.100 0)");
        assert_eq!(Oklch::new(0.5, 0.0, 123.0).to_string(), "oklch(0.500 0.000 0)");
    }

    #[test]
    fn parse_css_function() {
        let c = Oklch::parse("oklch(0.7 0.1 90)").unwrap();
        assert_eq!(c, Oklch::new(0.7, 0.1, 90.0));
        assert!(Oklch::parse("oklch(0.7, 0.1)").is_err());
    }

    #[test]
    fn hsl_to_oklch_matches_rgb_path_for_exact_colors() {
        // Pure red is exact in both HSL and 8-bit RGB.
        let via_hsl = hsl_to_oklch(Hsl::new(0.0, 100.0, 50.0));
        let via_rgb = rgb_to_oklch(Rgb::new(255, 0, 0));
        assert!(approx_eq(via_hsl.l, via_rgb.l, 1e-9));
        assert!(approx_eq(via_hsl.c, via_rgb.c, 1e-9));
    }
}
