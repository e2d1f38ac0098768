//! Named preset themes: ready-to-use seed sets.
//!
//! Most presets only define light seeds and let the cross-mode deriver build
//! the dark side. `mono` is achromatic, so its dark seeds are spelled out;
//! deriving them would tint the background with hue 0.

use crate::seeds::{SeedColors, hsl};
use crate::state::{Fonts, ThemeState};

const VIOLET: SeedColors = SeedColors {
    background: hsl(0.0, 0.0, 100.0),
    foreground: hsl(291.0, 10.0, 4.0),
    primary: hsl(291.0, 80.0, 45.0),
    secondary: hsl(291.0, 30.0, 85.0),
    accent: hsl(291.0, 50.0, 75.0),
    destructive: hsl(27.0, 100.0, 50.0),
};

const OCEAN: SeedColors = SeedColors {
    background: hsl(200.0, 30.0, 98.0),
    foreground: hsl(210.0, 40.0, 8.0),
    primary: hsl(205.0, 85.0, 42.0),
    secondary: hsl(195.0, 40.0, 88.0),
    accent: hsl(175.0, 60.0, 70.0),
    destructive: hsl(0.0, 84.0, 60.0),
};

const FOREST: SeedColors = SeedColors {
    background: hsl(90.0, 20.0, 97.0),
    foreground: hsl(140.0, 30.0, 8.0),
    primary: hsl(145.0, 60.0, 32.0),
    secondary: hsl(100.0, 25.0, 86.0),
    accent: hsl(80.0, 55.0, 68.0),
    destructive: hsl(10.0, 80.0, 52.0),
};

const SUNSET: SeedColors = SeedColors {
    background: hsl(30.0, 50.0, 98.0),
    foreground: hsl(15.0, 30.0, 10.0),
    primary: hsl(18.0, 90.0, 55.0),
    secondary: hsl(35.0, 70.0, 88.0),
    accent: hsl(340.0, 70.0, 72.0),
    destructive: hsl(0.0, 84.0, 52.0),
};

const MONO_LIGHT: SeedColors = SeedColors {
    background: hsl(0.0, 0.0, 100.0),
    foreground: hsl(0.0, 0.0, 4.0),
    primary: hsl(0.0, 0.0, 9.0),
    secondary: hsl(0.0, 0.0, 94.0),
    accent: hsl(0.0, 0.0, 90.0),
    destructive: hsl(0.0, 84.0, 60.0),
};

const MONO_DARK: SeedColors = SeedColors {
    background: hsl(0.0, 0.0, 4.0),
    foreground: hsl(0.0, 0.0, 98.0),
    primary: hsl(0.0, 0.0, 98.0),
    secondary: hsl(0.0, 0.0, 15.0),
    accent: hsl(0.0, 0.0, 20.0),
    destructive: hsl(0.0, 63.0, 31.0),
};

/// Look up a preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<ThemeState> {
    Some(match name {
        "default" | "zinc" => ThemeState::default(),
        "violet" => ThemeState::from_light_seeds(&VIOLET),
        "ocean" => ThemeState::from_light_seeds(&OCEAN).with_radius(0.75),
        "forest" => ThemeState::from_light_seeds(&FOREST),
        "sunset" => ThemeState::from_light_seeds(&SUNSET).with_radius(1.0),
        "mono" => ThemeState::from_seeds(&MONO_LIGHT, &MONO_DARK)
            .with_radius(0.0)
            .with_fonts(Fonts::uniform("JetBrains Mono")),
        _ => return None,
    })
}

/// List all preset names. Aliases are not included.
#[must_use]
pub const fn preset_names() -> &'static [&'static str] {
    &["default", "violet", "ocean", "forest", "sunset", "mono"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
