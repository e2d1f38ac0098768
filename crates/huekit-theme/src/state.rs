//! `ThemeState`: everything a shared theme link carries.
//!
//! Values are immutable. Every edit returns a new state, so a caller keeping
//! "the current theme" just swaps one value for another.

use huekit_color::Hsl;

use crate::cross_mode::{derive_dark_from_light, derive_light_from_dark};
use crate::palette::{Palette, derive_palette};
use crate::seeds::{Mode, SeedColors, SeedSlot};

/// Font used for both body and heading text unless overridden.
pub const DEFAULT_FONT: &str = "Geist";

/// Corner radius in rem.
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Body and heading font families.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

impl Fonts {
    #[must_use]
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// The same family for headings and body text.
    #[must_use]
    pub fn uniform(family: impl Into<String>) -> Self {
        let family = family.into();
        Self {
            heading: family.clone(),
            body: family,
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.heading == DEFAULT_FONT && self.body == DEFAULT_FONT
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self::uniform(DEFAULT_FONT)
    }
}

/// A complete two-mode theme plus the non-color settings shared with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    pub light: Palette,
    pub dark: Palette,
    pub fonts: Fonts,
    /// Corner radius in rem.
    pub border_radius: f64,
    pub is_dark_mode: bool,
}

impl ThemeState {
    /// Build from explicit seeds for both modes.
    #[must_use]
    pub fn from_seeds(light: &SeedColors, dark: &SeedColors) -> Self {
        Self {
            light: derive_palette(light, Mode::Light),
            dark: derive_palette(dark, Mode::Dark),
            fonts: Fonts::default(),
            border_radius: DEFAULT_RADIUS,
            is_dark_mode: false,
        }
    }

    /// Build from light seeds, synthesizing the dark seeds.
    #[must_use]
    pub fn from_light_seeds(light: &SeedColors) -> Self {
        Self::from_seeds(light, &derive_dark_from_light(light))
    }

    /// Build from dark seeds, synthesizing the light seeds.
    #[must_use]
    pub fn from_dark_seeds(dark: &SeedColors) -> Self {
        Self::from_seeds(&derive_light_from_dark(dark), dark)
    }

    #[must_use]
    pub const fn palette(&self, mode: Mode) -> &Palette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// The palette for the mode the user is currently viewing.
    #[must_use]
    pub const fn active_palette(&self) -> &Palette {
        self.palette(Mode::from_dark(self.is_dark_mode))
    }

    #[must_use]
    pub const fn active_mode(&self) -> Mode {
        Mode::from_dark(self.is_dark_mode)
    }

    /// Change one seed of one mode. The other mode's palette is left alone,
    /// even if it was originally synthesized; see [`Self::rederive_dark`].
    #[must_use]
    pub fn with_seed_color(mut self, mode: Mode, slot: SeedSlot, color: Hsl) -> Self {
        match mode {
            Mode::Light => self.light = self.light.with_seed(slot, color),
            Mode::Dark => self.dark = self.dark.with_seed(slot, color),
        }
        self
    }

    /// Whether the dark seeds differ from what [`derive_dark_from_light`]
    /// would rebuild out of the light seeds, compared at whole-number
    /// precision.
    #[must_use]
    pub fn has_custom_dark(&self) -> bool {
        let synthesized = derive_dark_from_light(&self.light.seeds().rounded());
        self.dark.seeds().rounded() != synthesized.rounded()
    }

    /// Replace the dark palette with one synthesized from the light seeds.
    #[must_use]
    pub fn rederive_dark(mut self) -> Self {
        self.dark = derive_palette(&derive_dark_from_light(&self.light.seeds()), Mode::Dark);
        self
    }

    #[must_use]
    pub fn with_fonts(mut self, fonts: Fonts) -> Self {
        self.fonts = fonts;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, border_radius: f64) -> Self {
        self.border_radius = border_radius;
        self
    }

    #[must_use]
    pub fn with_dark_mode(mut self, is_dark_mode: bool) -> Self {
        self.is_dark_mode = is_dark_mode;
        self
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::from_light_seeds(&SeedColors::DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
