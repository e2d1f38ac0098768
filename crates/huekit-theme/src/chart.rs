//! Monochromatic chart stops.
//!
//! Five data-visualization colors share the primary's hue. Stop 1 is the
//! primary itself; the remaining stops step saturation and lightness away
//! from it in both directions so neighbouring series stay distinguishable.
//! Dark palettes step lighter and more saturated first, light palettes the
//! reverse.

use huekit_color::Hsl;

use crate::seeds::{Mode, SeedColors};

const SATURATION_RANGE: (f64, f64) = (20.0, 95.0);
const LIGHTNESS_RANGE: (f64, f64) = (8.0, 85.0);

/// `(Δs, Δl)` for stops 2 through 5.
const LIGHT_STEPS: [(f64, f64); 4] = [(-10.0, 12.0), (-20.0, 24.0), (5.0, -12.0), (10.0, -22.0)];
const DARK_STEPS: [(f64, f64); 4] = [(5.0, 10.0), (10.0, 20.0), (-10.0, -10.0), (-15.0, -18.0)];

/// The five chart colors for `seeds` in `mode`.
///
/// Only the primary seed is consulted; secondary and accent have their own
/// tokens and would muddy a single-hue ramp.
#[must_use]
pub fn chart_colors(seeds: &SeedColors, mode: Mode) -> [Hsl; 5] {
    let primary = seeds.primary;
    let steps = if mode.is_dark() { &DARK_STEPS } else { &LIGHT_STEPS };

    let mut stops = [primary; 5];
    for (stop, &(ds, dl)) in stops.iter_mut().skip(1).zip(steps) {
        *stop = Hsl::new(
            primary.h,
            (primary.s + ds).clamp(SATURATION_RANGE.0, SATURATION_RANGE.1),
            (primary.l + dl).clamp(LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1),
        );
    }
    stops
}

/// [`chart_colors`] for callers holding loose colors rather than a seed set.
#[must_use]
pub fn chart_colors_for(primary: Hsl, secondary: Hsl, accent: Hsl, is_dark: bool) -> [Hsl; 5] {
    let seeds = SeedColors {
        primary,
        secondary,
        accent,
        ..SeedColors::DEFAULT
    };
    chart_colors(&seeds, Mode::from_dark(is_dark))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeds_with_primary(primary: Hsl) -> SeedColors {
        SeedColors {
            primary,
            ..SeedColors::DEFAULT
        }
    }

    #[test]
    fn first_stop_is_primary_verbatim() {
        let primary = Hsl::new(291.0, 8.0, 3.0);
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(chart_colors(&seeds_with_primary(primary), mode)[0], primary);
        }
    }

    #[test]
    fn light_steps() {
        let stops = chart_colors(&seeds_with_primary(Hsl::new(291.0, 80.0, 45.0)), Mode::Light);
        let sl: Vec<_> = stops.iter().map(|c| (c.s, c.l)).collect();
        assert_eq!(
            sl,
            vec![(80.0, 45.0), (70.0, 57.0), (60.0, 69.0), (85.0, 33.0), (90.0, 23.0)]
        );
    }

    #[test]
    fn dark_steps() {
        let stops = chart_colors(&seeds_with_primary(Hsl::new(291.0, 85.0, 40.0)), Mode::Dark);
        let sl: Vec<_> = stops.iter().map(|c| (c.s, c.l)).collect();
        assert_eq!(
            sl,
            vec![(85.0, 40.0), (90.0, 50.0), (95.0, 60.0), (75.0, 30.0), (70.0, 22.0)]
        );
    }

    #[test]
    fn stops_are_clamped_and_keep_hue() {
        let stops = chart_colors(&seeds_with_primary(Hsl::new(17.0, 100.0, 95.0)), Mode::Light);
        for stop in &stops[1..] {
            assert_eq!(stop.h, 17.0);
            assert!((20.0..=95.0).contains(&stop.s));
            assert!((8.0..=85.0).contains(&stop.l));
        }
    }

    #[test]
    fn ignores_secondary_and_accent() {
        let a = seeds_with_primary(Hsl::new(200.0, 60.0, 50.0));
        let b = SeedColors {
            secondary: Hsl::new(10.0, 90.0, 10.0),
            accent: Hsl::new(90.0, 90.0, 90.0),
            ..a
        };
        assert_eq!(chart_colors(&a, Mode::Dark), chart_colors(&b, Mode::Dark));
    }

    #[test]
    fn loose_color_form_matches_seed_form() {
        let seeds = seeds_with_primary(Hsl::new(205.0, 85.0, 42.0));
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(
                chart_colors_for(seeds.primary, seeds.secondary, seeds.accent, mode.is_dark()),
                chart_colors(&seeds, mode)
            );
        }
    }
}
