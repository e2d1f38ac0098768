//! Legible foreground selection.
//!
//! Every `*-foreground` token is derived from the surface it sits on by a
//! lightness heuristic:
//!
//! - Default role: near-black text on light surfaces (l > 60), near-white
//!   text otherwise.
//! - Muted role: text pulled 40 points of lightness away from the surface,
//!   kept inside a band so it reads as de-emphasized rather than invisible.
//!
//! Very saturated surfaces get a desaturated foreground so the text does not
//! vibrate against its background. The hue is always carried through.
//!
//! The heuristic makes no WCAG promise. [`contrast_ratio`] is provided for
//! callers that want to measure the outcome.

use huekit_color::{Hsl, rgb::srgb_to_linear};

/// Surfaces lighter than this get dark text.
pub const LIGHT_SURFACE_THRESHOLD: f64 = 60.0;
/// Surfaces more saturated than this get a desaturated foreground.
pub const VIVID_SATURATION_THRESHOLD: f64 = 70.0;
/// Saturation given to foregrounds of vivid surfaces.
pub const DESATURATED_FOREGROUND: f64 = 10.0;

const DARK_TEXT_LIGHTNESS: f64 = 10.0;
const LIGHT_TEXT_LIGHTNESS: f64 = 95.0;

const MUTED_OFFSET: f64 = 40.0;
const MUTED_FLOOR: f64 = 10.0;
const MUTED_CEILING: f64 = 50.0;

/// How strongly a foreground should stand out from its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForegroundRole {
    /// Body text, button labels.
    #[default]
    Default,
    /// Secondary text such as placeholders and captions.
    Muted,
}

/// Pick a foreground that reads against `surface`.
#[must_use]
pub fn contrasting_foreground(surface: Hsl, role: ForegroundRole) -> Hsl {
    let is_light = surface.l > LIGHT_SURFACE_THRESHOLD;
    let l = match role {
        ForegroundRole::Default if is_light => DARK_TEXT_LIGHTNESS,
        ForegroundRole::Default => LIGHT_TEXT_LIGHTNESS,
        ForegroundRole::Muted if is_light => (surface.l - MUTED_OFFSET).max(MUTED_FLOOR),
        ForegroundRole::Muted => (surface.l + MUTED_OFFSET).min(MUTED_CEILING),
    };
    let s = if surface.s > VIVID_SATURATION_THRESHOLD {
        DESATURATED_FOREGROUND
    } else {
        surface.s
    };
    Hsl::new(surface.h, s, l)
}

/// WCAG 2.1 relative luminance in [0, 1].
#[must_use]
pub fn relative_luminance(color: Hsl) -> f64 {
    let [r, g, b] = color.to_rgb().to_unit().map(srgb_to_linear);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio in [1, 21], independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Hsl, b: Hsl) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
