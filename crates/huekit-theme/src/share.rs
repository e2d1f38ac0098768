//! `?theme=<encoded>` share links.

use url::{Url, form_urlencoded};

use huekit_color::ColorError;

use crate::codec::{encode_theme, try_decode_theme};
use crate::state::ThemeState;

/// Query parameter carrying an encoded theme.
pub const THEME_PARAM: &str = "theme";

/// `base` with its `theme` parameter set to `state`, replacing any previous
/// value and keeping every other parameter in order.
#[must_use]
pub fn share_url(base: &Url, state: &ThemeState) -> Url {
    let encoded = encode_theme(state);
    let mut url = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != THEME_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(THEME_PARAM, &encoded);
    url
}

/// Extract a theme from a raw query string (a leading `?` is ignored).
///
/// Returns `Ok(None)` when there is no `theme` parameter, so callers can
/// tell "nothing shared" apart from "shared but corrupt".
///
/// # Errors
///
/// Any [`try_decode_theme`] error for a present but undecodable value.
pub fn theme_from_query(query: &str) -> Result<Option<ThemeState>, ColorError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == THEME_PARAM)
        .map(|(_, value)| try_decode_theme(&value))
        .transpose()
}

/// [`theme_from_query`] on a full URL.
///
/// # Errors
///
/// See [`theme_from_query`].
pub fn theme_from_url(url: &Url) -> Result<Option<ThemeState>, ColorError> {
    url.query().map_or(Ok(None), theme_from_query)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
