//! The 32 named design-token slots of a palette.

use std::fmt;

/// One named slot in a [`Palette`](crate::palette::Palette).
///
/// Discriminants double as indices into the palette's backing array, so the
/// order here is the order tokens are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    Chart1,
    Chart2,
    Chart3,
    Chart4,
    Chart5,
    Sidebar,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,
}

impl Token {
    pub const COUNT: usize = 32;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
        Self::Chart1,
        Self::Chart2,
        Self::Chart3,
        Self::Chart4,
        Self::Chart5,
        Self::Sidebar,
        Self::SidebarForeground,
        Self::SidebarPrimary,
        Self::SidebarPrimaryForeground,
        Self::SidebarAccent,
        Self::SidebarAccentForeground,
        Self::SidebarBorder,
        Self::SidebarRing,
    ];

    pub const CHARTS: [Self; 5] = [
        Self::Chart1,
        Self::Chart2,
        Self::Chart3,
        Self::Chart4,
        Self::Chart5,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// CSS custom-property name without the leading `--`.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
            Self::Chart1 => "chart-1",
            Self::Chart2 => "chart-2",
            Self::Chart3 => "chart-3",
            Self::Chart4 => "chart-4",
            Self::Chart5 => "chart-5",
            Self::Sidebar => "sidebar",
            Self::SidebarForeground => "sidebar-foreground",
            Self::SidebarPrimary => "sidebar-primary",
            Self::SidebarPrimaryForeground => "sidebar-primary-foreground",
            Self::SidebarAccent => "sidebar-accent",
            Self::SidebarAccentForeground => "sidebar-accent-foreground",
            Self::SidebarBorder => "sidebar-border",
            Self::SidebarRing => "sidebar-ring",
        }
    }

    /// The surface a foreground token is drawn on, or `None` for tokens that
    /// are not foregrounds.
    #[must_use]
    pub const fn background_pair(self) -> Option<Self> {
        Some(match self {
            Self::Foreground => Self::Background,
            Self::CardForeground => Self::Card,
            Self::PopoverForeground => Self::Popover,
            Self::PrimaryForeground => Self::Primary,
            Self::SecondaryForeground => Self::Secondary,
            Self::MutedForeground => Self::Muted,
            Self::AccentForeground => Self::Accent,
            Self::DestructiveForeground => Self::Destructive,
            Self::SidebarForeground => Self::Sidebar,
            Self::SidebarPrimaryForeground => Self::SidebarPrimary,
            Self::SidebarAccentForeground => Self::SidebarAccent,
            _ => return None,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_in_index_order() {
        for (i, token) in Token::ALL.iter().enumerate() {
            assert_eq!(token.index(), i, "{token} out of order");
        }
    }

    #[test]
    fn css_names_are_unique() {
        let names: HashSet<_> = Token::ALL.iter().map(|t| t.css_name()).collect();
        assert_eq!(names.len(), Token::COUNT);
    }

    #[test]
    fn every_foreground_has_a_pair() {
        for token in Token::ALL {
            let is_fg = token.css_name().ends_with("foreground");
            assert_eq!(token.background_pair().is_some(), is_fg, "{token}");
        }
    }

    #[test]
    fn charts_are_contiguous() {
        assert_eq!(Token::Chart5.index() - Token::Chart1.index(), 4);
    }
}
