//! Error taxonomy shared by every huekit crate.

use thiserror::Error;

/// Everything that can go wrong while parsing colors or decoding a theme.
///
/// Conversions between color spaces never fail; only the boundaries where
/// text enters the system do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex or HSL string that does not match any accepted grammar.
    #[error("invalid color `{input}`: {reason}")]
    InvalidColor { input: String, reason: String },

    /// The base64 transport or the JSON payload inside it is unreadable.
    #[error("invalid theme encoding: {0}")]
    InvalidEncoding(String),

    /// A seed set is missing one of its mandatory colors.
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),
}

impl ColorError {
    pub(crate) fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
