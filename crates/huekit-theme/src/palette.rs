//! Palette derivation: the bridge from six seeds to 32 concrete tokens.
//!
//! A [`Palette`] can only be produced by [`derive_palette`], and its slots
//! cannot be written individually. Changing a color means changing a seed
//! and deriving again ([`Palette::with_seed`]), so a foreground can never
//! drift out of sync with the surface it was computed from.

use std::ops::Index;

use huekit_color::Hsl;

use crate::chart::chart_colors;
use crate::contrast::{ForegroundRole, contrasting_foreground};
use crate::seeds::{Mode, SeedColors, SeedSlot};
use crate::token::Token;

// ---------------------------------------------------------------------------
// Adjustment helpers
// ---------------------------------------------------------------------------

/// Add `by` to `v` without exceeding `cap`, and never end below `v`.
#[inline]
pub(crate) fn raise_capped(v: f64, by: f64, cap: f64) -> f64 {
    (v + by).min(cap).max(v)
}

/// Subtract `by` from `v` without going under `floor`, and never end above
/// `v`.
#[inline]
pub(crate) fn lower_floored(v: f64, by: f64, floor: f64) -> f64 {
    (v - by).max(floor).min(v)
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A complete set of design tokens for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    mode: Mode,
    colors: [Hsl; Token::COUNT],
}

impl Palette {
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, token: Token) -> Hsl {
        self.colors[token.index()]
    }

    /// Tokens paired with their colors, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, Hsl)> + '_ {
        Token::ALL.into_iter().map(|token| (token, self.get(token)))
    }

    /// The six seeds this palette was derived from.
    #[must_use]
    pub fn seeds(&self) -> SeedColors {
        SeedColors {
            background: self.get(Token::Background),
            foreground: self.get(Token::Foreground),
            primary: self.get(Token::Primary),
            secondary: self.get(Token::Secondary),
            accent: self.get(Token::Accent),
            destructive: self.get(Token::Destructive),
        }
    }

    /// Replace one seed and re-derive every dependent token.
    #[must_use]
    pub fn with_seed(&self, slot: SeedSlot, color: Hsl) -> Self {
        derive_palette(&self.seeds().with(slot, color), self.mode)
    }
}

impl Index<Token> for Palette {
    type Output = Hsl;

    fn index(&self, token: Token) -> &Hsl {
        &self.colors[token.index()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        derive_palette(&SeedColors::DEFAULT, Mode::Light)
    }
}

/// Free-function form of [`Palette::with_seed`].
#[must_use]
pub fn set_seed_color(palette: &Palette, slot: SeedSlot, color: Hsl) -> Palette {
    palette.with_seed(slot, color)
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive all 32 tokens from `seeds`. Deterministic and total.
#[must_use]
pub fn derive_palette(seeds: &SeedColors, mode: Mode) -> Palette {
    tracing::debug!(%mode, primary = %seeds.primary, "deriving palette");

    let SeedColors {
        background,
        foreground,
        primary,
        secondary,
        accent,
        destructive,
    } = *seeds;
    let is_dark = mode.is_dark();
    let fg_for = |surface: Hsl| contrasting_foreground(surface, ForegroundRole::Default);

    let surface = if is_dark {
        background.with_lightness(raise_capped(background.l, 4.0, 20.0))
    } else {
        background
    };
    let border = if is_dark {
        Hsl::new(
            background.h,
            raise_capped(background.s, 10.0, 30.0),
            background.l + 10.0,
        )
    } else {
        background.with_lightness(background.l - 10.0)
    };
    let (sidebar, sidebar_fg) = if is_dark {
        (background, foreground)
    } else {
        (secondary, fg_for(secondary))
    };
    let destructive_fg = if is_dark { foreground } else { Hsl::WHITE };

    let primary_fg = fg_for(primary);
    let accent_fg = fg_for(accent);
    let charts = chart_colors(seeds, mode);

    let mut colors = [Hsl::BLACK; Token::COUNT];
    let mut set = |token: Token, color: Hsl| colors[token.index()] = color;

    set(Token::Background, background);
    set(Token::Foreground, foreground);
    set(Token::Card, surface);
    set(Token::CardForeground, foreground);
    set(Token::Popover, surface);
    set(Token::PopoverForeground, foreground);
    set(Token::Primary, primary);
    set(Token::PrimaryForeground, primary_fg);
    set(Token::Secondary, secondary);
    set(Token::SecondaryForeground, fg_for(secondary));
    set(Token::Muted, secondary);
    set(
        Token::MutedForeground,
        contrasting_foreground(secondary, ForegroundRole::Muted),
    );
    set(Token::Accent, accent);
    set(Token::AccentForeground, accent_fg);
    set(Token::Destructive, destructive);
    set(Token::DestructiveForeground, destructive_fg);
    set(Token::Border, border);
    set(Token::Input, border);
    set(Token::Ring, primary);
    for (token, color) in Token::CHARTS.into_iter().zip(charts) {
        set(token, color);
    }
    set(Token::Sidebar, sidebar);
    set(Token::SidebarForeground, sidebar_fg);
    set(Token::SidebarPrimary, primary);
    set(Token::SidebarPrimaryForeground, primary_fg);
    set(Token::SidebarAccent, accent);
    set(Token::SidebarAccentForeground, accent_fg);
    set(Token::SidebarBorder, border);
    set(Token::SidebarRing, primary);

    Palette { mode, colors }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
