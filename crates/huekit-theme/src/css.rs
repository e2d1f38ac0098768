//! CSS custom-property rendering.
//!
//! Produces the two rule blocks a stylesheet needs:
//!
//! ```css
//! :root {
//!   --background: 0 0% 100%;
//!   ...
//!   --radius: 0.5rem;
//!   --font-sans: "Geist", sans-serif;
//!   --font-heading: "Geist", sans-serif;
//! }
//!
//! .dark {
//!   --background: 291 30% 8%;
//!   ...
//! }
//! ```

use std::fmt::{self, Write as _};

use crate::palette::Palette;
use crate::state::ThemeState;

/// How each token's value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CssFormat {
    /// Bare `H S% L%` triples, for use inside `hsl(var(--token))`.
    #[default]
    Hsl,
    /// Complete `oklch(L C H)` values.
    Oklch,
}

/// A double-quoted CSS string. Quotes and backslashes get a backslash;
/// control characters become `\hex ` escapes.
struct CssString<'a>(&'a str);

impl fmt::Display for CssString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' | '\\' => write!(f, "\\{c}")?,
                c if c.is_control() => write!(f, "\\{:x} ", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

/// Displayable stylesheet for a theme. [`render_css`] collects it into a
/// `String`.
#[derive(Debug, Clone, Copy)]
pub struct CssVariables<'a> {
    state: &'a ThemeState,
    format: CssFormat,
}

impl<'a> CssVariables<'a> {
    #[must_use]
    pub const fn new(state: &'a ThemeState, format: CssFormat) -> Self {
        Self { state, format }
    }

    fn write_tokens(&self, f: &mut fmt::Formatter<'_>, palette: &Palette) -> fmt::Result {
        for (token, color) in palette.iter() {
            match self.format {
                CssFormat::Hsl => writeln!(f, "  --{token}: {color};")?,
                CssFormat::Oklch => writeln!(f, "  --{token}: {};", color.to_oklch())?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for CssVariables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        writeln!(f, ":root {{")?;
        self.write_tokens(f, &state.light)?;
        writeln!(f, "  --radius: {}rem;", state.border_radius)?;
        writeln!(f, "  --font-sans: {}, sans-serif;", CssString(&state.fonts.body))?;
        writeln!(f, "  --font-heading: {}, sans-serif;", CssString(&state.fonts.heading))?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, ".dark {{")?;
        self.write_tokens(f, &state.dark)?;
        writeln!(f, "}}")
    }
}

/// Render `state` as `:root` and `.dark` custom-property blocks.
#[must_use]
pub fn render_css(state: &ThemeState, format: CssFormat) -> String {
    CssVariables::new(state, format).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Fonts;
    use crate::token::Token;
    use pretty_assertions::assert_eq;

    fn block<'a>(css: &'a str, selector: &str) -> Vec<&'a str> {
        css.split(&format!("{selector} {{\n"))
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .unwrap()
            .lines()
            .collect()
    }

    #[test]
    fn every_token_in_both_blocks() {
        let css = render_css(&ThemeState::default(), CssFormat::Hsl);
        let root = block(&css, ":root");
        let dark = block(&css, ".dark");
        assert_eq!(root.len(), Token::COUNT + 3);
        assert_eq!(dark.len(), Token::COUNT);
        for token in Token::ALL {
            let prefix = format!("  --{token}: ");
            assert!(root.iter().any(|l| l.starts_with(&prefix)), "{token} missing");
            assert!(dark.iter().any(|l| l.starts_with(&prefix)), "{token} missing");
        }
    }

    #[test]
    fn hsl_values_are_bare_triples() {
        let css = render_css(&ThemeState::default(), CssFormat::Hsl);
        assert_eq!(block(&css, ":root")[0], "  --background: 0 0% 100%;");
    }

    #[test]
    fn oklch_values() {
        let css = render_css(&ThemeState::default(), CssFormat::Oklch);
        assert_eq!(block(&css, ":root")[0], "  --background: oklch(1.000 0.000 0);");
        assert!(block(&css, ".dark").iter().all(|l| l.contains("oklch(")));
    }

    #[test]
    fn settings_are_rendered() {
        let state = ThemeState::default()
            .with_radius(0.75)
            .with_fonts(Fonts::new("Lora", "Inter"));
        let css = render_css(&state, CssFormat::Hsl);
        assert!(css.contains("  --radius: 0.75rem;\n"));
        assert!(css.contains("  --font-sans: \"Inter\", sans-serif;\n"));
        assert!(css.contains("  --font-heading: \"Lora\", sans-serif;\n"));
    }

    #[test]
    fn font_names_cannot_escape_their_string() {
        let hostile = "x\", sans-serif; } body { display: none } :root { --z: \"";
        let state = ThemeState::default().with_fonts(Fonts::new("a\\b\nc", hostile));
        let css = render_css(&state, CssFormat::Hsl);

        assert!(css.contains(
            "  --font-sans: \"x\\\", sans-serif; } body { display: none } :root { --z: \\\"\", sans-serif;\n"
        ));
        assert!(css.contains("  --font-heading: \"a\\\\b\\a c\", sans-serif;\n"));
        assert_eq!(css.lines().filter(|l| *l == "}").count(), 2);
        assert_eq!(css.lines().count(), Token::COUNT * 2 + 3 + 5);
    }
}
