//! # huekit-theme: design-token palettes from six seed colors
//!
//! Turns a handful of user-picked colors into a complete light/dark token
//! set, and squeezes the result into a string short enough for a URL.
//!
//! # Architecture
//!
//! ```text
//! SeedColors (6) + Mode
//!     │
//!     ├── cross_mode.rs: synthesize the missing mode's seeds (hue-preserving)
//!     │
//!     ▼
//! palette.rs:  assign seeds and derived surfaces to 32 tokens
//!     │
//!     ├── contrast.rs: pick a legible foreground for every surface
//!     ├── chart.rs:    five monochromatic stops from the primary
//!     ▼
//! state.rs:    ThemeState { light, dark, fonts, radius, dark-mode flag }
//!     │
//!     ├── codec.rs:  seeds → compact JSON → URL-safe base64 (and back)
//!     ├── share.rs:  ?theme=<encoded> links
//!     └── css.rs:    :root / .dark custom-property blocks
//! ```
//!
//! Everything is a pure function over immutable values. A palette's slots
//! are private; the only way to change one is to change a seed and derive
//! again, so foregrounds always match the surfaces they were computed for.

// Lightness/saturation arithmetic names are inherently similar.
#![allow(clippy::similar_names)]
// Preset tables and the token assignment are one long list by nature.
#![allow(clippy::too_many_lines)]

pub mod builtin;
pub mod chart;
pub mod codec;
pub mod contrast;
pub mod cross_mode;
pub mod css;
pub mod palette;
pub mod seeds;
pub mod share;
pub mod state;
pub mod token;

pub use builtin::{preset, preset_names};
pub use chart::{chart_colors, chart_colors_for};
pub use codec::{decode_theme, encode_theme, try_decode_theme};
pub use contrast::{ForegroundRole, contrast_ratio, contrasting_foreground};
pub use cross_mode::{derive_dark_from_light, derive_light_from_dark};
pub use css::{CssFormat, render_css};
pub use palette::{Palette, derive_palette, set_seed_color};
pub use seeds::{DEFAULT_DESTRUCTIVE, Mode, SeedColors, SeedSlot};
pub use share::{THEME_PARAM, share_url, theme_from_query, theme_from_url};
pub use state::{DEFAULT_FONT, DEFAULT_RADIUS, Fonts, ThemeState};
pub use token::Token;

pub use huekit_color::{Color, ColorError, Hsl};
