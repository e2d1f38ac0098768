//! Synthesizing one mode's seeds from the other's.
//!
//! A theme is often authored in a single mode. These transforms keep the
//! primary's hue as the theme's identity and rebuild background/foreground
//! around it, while secondary and accent keep their own hue and saturation
//! and only move in lightness.
//!
//! The two directions are independent heuristics, not inverses of each
//! other.

use huekit_color::Hsl;

use crate::palette::{lower_floored, raise_capped};
use crate::seeds::SeedColors;

/// Dark seeds for a theme that only has light seeds.
#[must_use]
pub fn derive_dark_from_light(light: &SeedColors) -> SeedColors {
    let SeedColors {
        primary,
        secondary,
        accent,
        destructive,
        ..
    } = *light;
    let hue = primary.h;

    SeedColors {
        background: Hsl::new(hue, 30.0, 8.0),
        foreground: Hsl::new(hue, 10.0, 95.0),
        primary: Hsl::new(
            hue,
            raise_capped(primary.s, 5.0, 90.0),
            lower_floored(primary.l, 10.0, 40.0),
        ),
        secondary: secondary.with_lightness((secondary.l - 60.0).clamp(15.0, 25.0)),
        accent: accent.with_lightness(lower_floored(accent.l, 30.0, 40.0)),
        destructive,
    }
}

/// Light seeds for a theme that only has dark seeds.
#[must_use]
pub fn derive_light_from_dark(dark: &SeedColors) -> SeedColors {
    let SeedColors {
        primary,
        secondary,
        accent,
        destructive,
        ..
    } = *dark;
    let hue = primary.h;

    SeedColors {
        background: Hsl::new(hue, 20.0, 98.0),
        foreground: Hsl::new(hue, 10.0, 4.0),
        primary: primary.with_lightness(raise_capped(primary.l, 10.0, 60.0)),
        secondary: secondary.with_lightness((secondary.l + 60.0).clamp(85.0, 96.0)),
        accent: accent.with_lightness(raise_capped(accent.l, 20.0, 85.0)),
        destructive,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn violet() -> SeedColors {
        SeedColors::parse([
            "0 0% 100%",
            "291 10% 4%",
            "291 80% 45%",
            "291 30% 85%",
            "291 50% 75%",
            "27 100% 50%",
        ])
        .unwrap()
    }

    #[test]
    fn dark_from_violet() {
        let dark = derive_dark_from_light(&violet());
        assert_eq!(dark.background, Hsl::new(291.0, 30.0, 8.0));
        assert_eq!(dark.foreground, Hsl::new(291.0, 10.0, 95.0));
        assert_eq!(dark.primary, Hsl::new(291.0, 85.0, 40.0));
        assert_eq!(dark.secondary, Hsl::new(291.0, 30.0, 25.0));
        assert_eq!(dark.accent, Hsl::new(291.0, 50.0, 45.0));
        assert_eq!(dark.destructive, violet().destructive);
    }

    #[test]
    fn dark_primary_is_never_brightened_or_desaturated() {
        let seeds = SeedColors {
            primary: Hsl::new(10.0, 95.0, 30.0),
            ..violet()
        };
        let dark = derive_dark_from_light(&seeds);
        assert_eq!(dark.primary.s, 95.0);
        assert_eq!(dark.primary.l, 30.0);
    }

    #[test]
    fn dark_secondary_is_clamped() {
        let low = SeedColors {
            secondary: Hsl::new(100.0, 20.0, 50.0),
            ..violet()
        };
        assert_eq!(derive_dark_from_light(&low).secondary.l, 15.0);
    }

    #[test]
    fn light_from_dark() {
        let dark = derive_dark_from_light(&violet());
        let light = derive_light_from_dark(&dark);
        assert_eq!(light.background, Hsl::new(291.0, 20.0, 98.0));
        assert_eq!(light.foreground, Hsl::new(291.0, 10.0, 4.0));
        assert_eq!(light.primary.l, 50.0);
        assert_eq!(light.secondary.l, 85.0);
        assert_eq!(light.accent.l, 65.0);
    }

    #[test]
    fn both_directions_keep_hues() {
        let seeds = violet();
        for derived in [derive_dark_from_light(&seeds), derive_light_from_dark(&seeds)] {
            assert_eq!(derived.primary.h, seeds.primary.h);
            assert_eq!(derived.secondary.h, seeds.secondary.h);
            assert_eq!(derived.accent.h, seeds.accent.h);
            assert_eq!(derived.secondary.s, seeds.secondary.s);
            assert_eq!(derived.accent.s, seeds.accent.s);
        }
    }
}
