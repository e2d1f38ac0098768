//! Compact theme encoding for share links.
//!
//! Only seeds travel; every other token is re-derived on load. The payload is
//! a small JSON object with one- or two-letter keys:
//!
//! ```text
//! { "l":  { "bg": "0,0,100", "fg": "291,10,4", "p": ..., "s": ..., "a": ..., "de": ... },
//!   "d":  { ... }            dark seeds, when viewed in dark mode or customized
//!   "f":  [heading, body]    null entries mean the default font; omitted if both default
//!   "r":  0.75               omitted at the default radius
//!   "dm": 1 }                omitted when false; any non-zero value reads as true
//! ```
//!
//! The JSON is then base64-encoded with the URL-safe alphabet and no
//! padding. Decoding accepts either alphabet, with or without padding, and
//! tolerates `+` having been turned into a space by a query-string parser.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use huekit_color::{ColorError, Hsl};

use crate::cross_mode::derive_dark_from_light;
use crate::palette::derive_palette;
use crate::seeds::{DEFAULT_DESTRUCTIVE, Mode, SeedColors, SeedSlot};
use crate::state::{DEFAULT_FONT, DEFAULT_RADIUS, Fonts, ThemeState};

/// URL-safe output without padding; input padding is optional.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Six compact HSL strings. Every field is optional on the wire so a missing
/// key can be reported by name instead of as a generic JSON error.
#[derive(Debug, Default, Serialize, Deserialize)]
struct EncodedSeeds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    s: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    de: Option<String>,
}

impl EncodedSeeds {
    fn compact(seeds: &SeedColors) -> Self {
        let field = |slot: SeedSlot| Some(seeds.get(slot).to_compact());
        Self {
            bg: field(SeedSlot::Background),
            fg: field(SeedSlot::Foreground),
            p: field(SeedSlot::Primary),
            s: field(SeedSlot::Secondary),
            a: field(SeedSlot::Accent),
            de: field(SeedSlot::Destructive),
        }
    }

    fn expand(&self) -> Result<SeedColors, ColorError> {
        let required = |raw: Option<&String>, slot: SeedSlot| {
            raw.ok_or(ColorError::MissingRequiredField(slot.key()))
                .and_then(|raw| Hsl::parse(raw))
        };
        Ok(SeedColors {
            background: required(self.bg.as_ref(), SeedSlot::Background)?,
            foreground: required(self.fg.as_ref(), SeedSlot::Foreground)?,
            primary: required(self.p.as_ref(), SeedSlot::Primary)?,
            secondary: required(self.s.as_ref(), SeedSlot::Secondary)?,
            accent: required(self.a.as_ref(), SeedSlot::Accent)?,
            destructive: match &self.de {
                Some(raw) => Hsl::parse(raw)?,
                None => DEFAULT_DESTRUCTIVE,
            },
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EncodedTheme {
    #[serde(default)]
    l: Option<EncodedSeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    d: Option<EncodedSeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    f: Option<(Option<String>, Option<String>)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    r: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dm: Option<Value>,
}

/// Read a loosely typed flag: `true`, any non-zero number, or a string
/// holding one. Anything else is false.
fn flag_is_set(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| n != 0.0),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn non_default_font(family: &str) -> Option<String> {
    (family != DEFAULT_FONT).then(|| family.to_owned())
}

/// Encode `state` into a URL-safe string.
#[must_use]
pub fn encode_theme(state: &ThemeState) -> String {
    let payload = EncodedTheme {
        l: Some(EncodedSeeds::compact(&state.light.seeds())),
        d: (state.is_dark_mode || state.has_custom_dark())
            .then(|| EncodedSeeds::compact(&state.dark.seeds())),
        f: (!state.fonts.is_default()).then(|| {
            (
                non_default_font(&state.fonts.heading),
                non_default_font(&state.fonts.body),
            )
        }),
        r: ((state.border_radius - DEFAULT_RADIUS).abs() > f64::EPSILON)
            .then_some(state.border_radius),
        dm: state.is_dark_mode.then(|| Value::from(1)),
    };

    // Strings, options and an f64 always serialize; non-finite floats become null.
    let json = serde_json::to_vec(&payload).unwrap_or_default();
    let encoded = URL_SAFE_LENIENT.encode(json);
    tracing::debug!(len = encoded.len(), dark = state.is_dark_mode, "encoded theme");
    encoded
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Normalize the standard alphabet (and a query parser's space-for-plus) to
/// the URL-safe one. Valid payloads never start or end with `+`, so
/// surrounding whitespace is dropped first.
fn normalize_alphabet(encoded: &str) -> String {
    encoded
        .trim()
        .chars()
        .map(|c| match c {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Decode a theme, reporting why decoding failed.
///
/// # Errors
///
/// - [`ColorError::InvalidEncoding`] for bad base64 or JSON.
/// - [`ColorError::MissingRequiredField`] when `l` or one of its five
///   required seeds is absent.
/// - [`ColorError::InvalidColor`] when a seed is not a valid HSL triple.
pub fn try_decode_theme(encoded: &str) -> Result<ThemeState, ColorError> {
    let bytes = URL_SAFE_LENIENT
        .decode(normalize_alphabet(encoded))
        .map_err(|err| ColorError::InvalidEncoding(err.to_string()))?;
    let payload: EncodedTheme = serde_json::from_slice(&bytes)
        .map_err(|err| ColorError::InvalidEncoding(err.to_string()))?;

    let light = payload
        .l
        .as_ref()
        .ok_or(ColorError::MissingRequiredField("l"))?
        .expand()?;
    let dark = match &payload.d {
        Some(seeds) => seeds.expand()?,
        None => derive_dark_from_light(&light),
    };

    let fonts = payload.f.map_or_else(Fonts::default, |(heading, body)| {
        Fonts::new(
            heading.unwrap_or_else(|| DEFAULT_FONT.to_owned()),
            body.unwrap_or_else(|| DEFAULT_FONT.to_owned()),
        )
    });

    tracing::debug!(has_dark = payload.d.is_some(), "decoded theme");
    Ok(ThemeState {
        light: derive_palette(&light, Mode::Light),
        dark: derive_palette(&dark, Mode::Dark),
        fonts,
        border_radius: payload.r.filter(|r| r.is_finite()).unwrap_or(DEFAULT_RADIUS),
        is_dark_mode: payload.dm.as_ref().is_some_and(flag_is_set),
    })
}

/// Decode a theme, discarding the reason on failure.
#[must_use]
pub fn decode_theme(encoded: &str) -> Option<ThemeState> {
    try_decode_theme(encoded)
        .inspect_err(|err| tracing::debug!(%err, "discarding undecodable theme"))
        .ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
