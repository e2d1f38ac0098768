//! # huekit-color: color space conversions
//!
//! Pure numeric conversions between the notations a theme editor meets:
//!
//! ```text
//!   "#7a3be0" ──► Rgb ◄──► Hsl            (derivation math happens in HSL)
//!                  │
//!                  ▼
//!          linear sRGB ◄──► XYZ (D65) ◄──► CIE Lab
//!                            │
//!                            ▼
//!                   LMS ◄──► Oklab ◄──► Oklch   (CSS output only)
//! ```
//!
//! Every conversion is a total function. Parsing is the only fallible step
//! and reports a [`ColorError`]; the `*_or_black` helpers resolve failures
//! to black for callers that must never abort.
//!
//! Nothing here holds mutable state. The two HSL grammars and the OKLCH
//! grammar are compiled once into immutable statics.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Matrix coefficients are quoted at the precision they were published with.
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

pub mod color;
pub mod error;
pub mod hsl;
pub mod oklch;
pub mod rgb;
pub mod xyz;

pub use color::Color;
pub use error::ColorError;
pub use hsl::{Hsl, hex_to_hsl, hex_to_hsl_or_black, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
pub use oklch::{Oklch, hsl_to_oklch, oklch_to_rgb, rgb_to_oklch};
pub use rgb::{HexColor, Rgb, hex_to_rgb, rgb_to_hex};
pub use xyz::{Lab, Xyz, lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
