//! Seed colors: the six user-chosen colors every palette is derived from.

use std::fmt;

use huekit_color::{ColorError, Hsl};

use crate::token::Token;

/// Build an `Hsl` literal in a const context. Components must already be in
/// range.
pub(crate) const fn hsl(h: f64, s: f64, l: f64) -> Hsl {
    Hsl { h, s, l }
}

/// Destructive red used whenever a seed set omits its destructive color.
pub const DEFAULT_DESTRUCTIVE: Hsl = hsl(0.0, 84.0, 60.0);

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which variant of a theme a palette belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

// ---------------------------------------------------------------------------
// SeedSlot
// ---------------------------------------------------------------------------

/// Names one of the six seed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedSlot {
    Background,
    Foreground,
    Primary,
    Secondary,
    Accent,
    Destructive,
}

impl SeedSlot {
    pub const ALL: [Self; 6] = [
        Self::Background,
        Self::Foreground,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Destructive,
    ];

    /// The palette token this seed lands in verbatim.
    #[must_use]
    pub const fn token(self) -> Token {
        match self {
            Self::Background => Token::Background,
            Self::Foreground => Token::Foreground,
            Self::Primary => Token::Primary,
            Self::Secondary => Token::Secondary,
            Self::Accent => Token::Accent,
            Self::Destructive => Token::Destructive,
        }
    }

    /// Key used for this seed inside an encoded theme payload.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Background => "bg",
            Self::Foreground => "fg",
            Self::Primary => "p",
            Self::Secondary => "s",
            Self::Accent => "a",
            Self::Destructive => "de",
        }
    }

    /// Look a slot up by its token name (`"primary"`) or payload key (`"p"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == name || slot.token().css_name() == name)
    }
}

impl fmt::Display for SeedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().css_name())
    }
}

// ---------------------------------------------------------------------------
// SeedColors
// ---------------------------------------------------------------------------

/// The minimal information needed to regenerate one mode's palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedColors {
    pub background: Hsl,
    pub foreground: Hsl,
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
    pub destructive: Hsl,
}

impl SeedColors {
    /// Neutral zinc seeds used when nothing else is known.
    pub const DEFAULT: Self = Self {
        background: hsl(0.0, 0.0, 100.0),
        foreground: hsl(240.0, 10.0, 4.0),
        primary: hsl(240.0, 6.0, 10.0),
        secondary: hsl(240.0, 5.0, 96.0),
        accent: hsl(240.0, 5.0, 96.0),
        destructive: DEFAULT_DESTRUCTIVE,
    };

    /// Parse six HSL strings in [`SeedSlot::ALL`] order. Either HSL grammar is
    /// accepted for each.
    ///
    /// # Errors
    ///
    /// The first [`ColorError::InvalidColor`] encountered.
    pub fn parse(values: [&str; 6]) -> Result<Self, ColorError> {
        let [bg, fg, p, s, a, de] = values;
        Ok(Self {
            background: Hsl::parse(bg)?,
            foreground: Hsl::parse(fg)?,
            primary: Hsl::parse(p)?,
            secondary: Hsl::parse(s)?,
            accent: Hsl::parse(a)?,
            destructive: Hsl::parse(de)?,
        })
    }

    #[must_use]
    pub const fn get(&self, slot: SeedSlot) -> Hsl {
        match slot {
            SeedSlot::Background => self.background,
            SeedSlot::Foreground => self.foreground,
            SeedSlot::Primary => self.primary,
            SeedSlot::Secondary => self.secondary,
            SeedSlot::Accent => self.accent,
            SeedSlot::Destructive => self.destructive,
        }
    }

    /// A copy with one seed replaced.
    #[must_use]
    pub const fn with(mut self, slot: SeedSlot, color: Hsl) -> Self {
        match slot {
            SeedSlot::Background => self.background = color,
            SeedSlot::Foreground => self.foreground = color,
            SeedSlot::Primary => self.primary = color,
            SeedSlot::Secondary => self.secondary = color,
            SeedSlot::Accent => self.accent = color,
            SeedSlot::Destructive => self.destructive = color,
        }
        self
    }

    /// Every seed rounded to whole-number components, the precision an
    /// encoded theme carries.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            background: self.background.rounded(),
            foreground: self.foreground.rounded(),
            primary: self.primary.rounded(),
            secondary: self.secondary.rounded(),
            accent: self.accent.rounded(),
            destructive: self.destructive.rounded(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeedSlot, Hsl)> + '_ {
        SeedSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

impl Default for SeedColors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
