// SPDX-License-Identifier: MIT
//
// huekit: derive light/dark design-token palettes from the command line.
//
// This binary is a thin front end over the two library crates:
//
//   huekit-color → parsing and color-space conversion
//   huekit-theme → palette derivation, presets, codec, CSS rendering
//
// Every subcommand parses its arguments into a `Command`, runs it to produce
// the text to print, and reports failures as `huekit: <error>` with exit
// status 1.
//
//   huekit convert <color>
//   huekit derive  [--dark] <bg> <fg> <primary> <secondary> <accent> [destructive]
//   huekit encode  [--dark-mode] [--radius R] [--font F] [--heading-font F] <seeds...>
//   huekit decode  [--oklch] <encoded | url | ?query>
//   huekit preset  <name>
//   huekit presets
//
// Logging goes to stderr and is controlled by `HUEKIT_LOG` (default `warn`).

use std::env;
use std::fmt::Write as _;
use std::process;

use anyhow::{Context, Result, anyhow, bail};
use huekit_color::Color;
use huekit_theme::{
    CssFormat, DEFAULT_FONT, DEFAULT_RADIUS, Fonts, Mode, SeedColors, SeedSlot, ThemeState,
    derive_palette, encode_theme, preset, preset_names, render_css, theme_from_query,
    theme_from_url, try_decode_theme,
};
use tracing_subscriber::EnvFilter;
use url::Url;

const LOG_ENV: &str = "HUEKIT_LOG";

const USAGE: &str = "\
usage: huekit <command> [args]

commands:
  convert <color>                         show a color in every notation
  derive [--dark] <seeds...>              print all 32 tokens for one mode
  encode [--dark-mode] [--radius R]
         [--font F] [--heading-font F] <seeds...>
                                          print a shareable theme string
  decode [--oklch] <encoded|url|?query>   print CSS variables for a theme
  preset <name>                           print a preset's theme string
  presets                                 list preset names

seeds: <bg> <fg> <primary> <secondary> <accent> [destructive]
colors: #rrggbb, \"H S% L%\", H,S,L or \"oklch(L C H)\"
";

// ─── Commands ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Convert(String),
    Derive {
        dark: bool,
        seeds: Vec<String>,
    },
    Encode {
        dark_mode: bool,
        radius: Option<f64>,
        font: Option<String>,
        heading_font: Option<String>,
        seeds: Vec<String>,
    },
    Decode {
        oklch: bool,
        input: String,
    },
    Preset(String),
    Presets,
    Help,
}

/// Split `args` into `--flag [value]` options and positionals.
struct ArgCursor<'a> {
    args: std::slice::Iter<'a, String>,
    positionals: Vec<String>,
}

impl<'a> ArgCursor<'a> {
    fn new(args: &'a [String]) -> Self {
        Self {
            args: args.iter(),
            positionals: Vec::new(),
        }
    }

    /// Next flag name, collecting positionals along the way.
    fn next_flag(&mut self) -> Option<&'a str> {
        for arg in self.args.by_ref() {
            if let Some(flag) = arg.strip_prefix("--") {
                return Some(flag);
            }
            self.positionals.push(arg.clone());
        }
        None
    }

    fn value(&mut self, flag: &str) -> Result<String> {
        self.args
            .next()
            .cloned()
            .ok_or_else(|| anyhow!("--{flag} needs a value"))
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };
    let mut cursor = ArgCursor::new(rest);

    let command = match name.as_str() {
        "convert" => {
            if let Some(flag) = cursor.next_flag() {
                bail!("convert: unknown option --{flag}");
            }
            let [color] = take_exact::<1>(cursor.positionals, "convert <color>")?;
            Command::Convert(color)
        }
        "derive" => {
            let mut dark = false;
            while let Some(flag) = cursor.next_flag() {
                match flag {
                    "dark" => dark = true,
                    other => bail!("derive: unknown option --{other}"),
                }
            }
            Command::Derive {
                dark,
                seeds: cursor.positionals,
            }
        }
        "encode" => {
            let (mut dark_mode, mut radius, mut font, mut heading_font) = (false, None, None, None);
            while let Some(flag) = cursor.next_flag() {
                match flag {
                    "dark-mode" => dark_mode = true,
                    "radius" => {
                        let raw = cursor.value(flag)?;
                        let r: f64 = raw
                            .parse()
                            .with_context(|| format!("--radius: `{raw}` is not a number"))?;
                        radius = Some(r);
                    }
                    "font" => font = Some(cursor.value(flag)?),
                    "heading-font" => heading_font = Some(cursor.value(flag)?),
                    other => bail!("encode: unknown option --{other}"),
                }
            }
            Command::Encode {
                dark_mode,
                radius,
                font,
                heading_font,
                seeds: cursor.positionals,
            }
        }
        "decode" => {
            let mut oklch = false;
            while let Some(flag) = cursor.next_flag() {
                match flag {
                    "oklch" => oklch = true,
                    other => bail!("decode: unknown option --{other}"),
                }
            }
            let [input] = take_exact::<1>(cursor.positionals, "decode <encoded>")?;
            Command::Decode { oklch, input }
        }
        "preset" => {
            let [name] = take_exact::<1>(rest.to_vec(), "preset <name>")?;
            Command::Preset(name)
        }
        "presets" => Command::Presets,
        "help" | "-h" | "--help" => Command::Help,
        other => bail!("unknown command `{other}`\n\n{USAGE}"),
    };
    Ok(command)
}

fn take_exact<const N: usize>(values: Vec<String>, usage: &str) -> Result<[String; N]> {
    values
        .try_into()
        .map_err(|_| anyhow!("usage: huekit {usage}"))
}

// ─── Execution ──────────────────────────────────────────────────────────────

/// Parse five or six seed colors in any accepted notation.
fn parse_seeds(values: &[String]) -> Result<SeedColors> {
    if !(5..=6).contains(&values.len()) {
        bail!(
            "expected 5 or 6 seed colors (bg fg primary secondary accent [destructive]), got {}",
            values.len()
        );
    }
    // A missing sixth seed leaves the default destructive red in place.
    let mut seeds = SeedColors::DEFAULT;
    for (slot, raw) in SeedSlot::ALL.into_iter().zip(values) {
        let color = Color::parse(raw).with_context(|| format!("{slot} seed"))?;
        seeds = seeds.with(slot, color.to_hsl());
    }
    Ok(seeds)
}

fn load_theme(input: &str) -> Result<ThemeState> {
    if let Ok(url) = Url::parse(input) {
        return theme_from_url(&url)?.ok_or_else(|| anyhow!("no `theme` parameter in {url}"));
    }
    if input.starts_with('?') || input.contains("theme=") {
        return theme_from_query(input)?.ok_or_else(|| anyhow!("no `theme` parameter in query"));
    }
    Ok(try_decode_theme(input)?)
}

fn run(command: Command) -> Result<String> {
    tracing::debug!(?command, "running");
    let mut out = String::new();
    match command {
        Command::Convert(raw) => {
            let color = Color::parse(&raw)?;
            let lab = color.to_lab();
            writeln!(out, "hex    {}", color.to_hex())?;
            writeln!(out, "rgb    {}", color.to_rgb())?;
            writeln!(out, "hsl    {}", color.to_hsl())?;
            writeln!(out, "oklch  {}", color.to_oklch())?;
            writeln!(out, "lab    {:.2} {:.2} {:.2}", lab.l, lab.a, lab.b)?;
        }
        Command::Derive { dark, seeds } => {
            let palette = derive_palette(&parse_seeds(&seeds)?, Mode::from_dark(dark));
            for (token, color) in palette.iter() {
                writeln!(out, "{:<28} {:<14} {}", token.css_name(), color.to_string(), color.to_hex())?;
            }
        }
        Command::Encode {
            dark_mode,
            radius,
            font,
            heading_font,
            seeds,
        } => {
            let body = font.unwrap_or_else(|| DEFAULT_FONT.to_owned());
            let heading = heading_font.unwrap_or_else(|| body.clone());
            let state = ThemeState::from_light_seeds(&parse_seeds(&seeds)?)
                .with_dark_mode(dark_mode)
                .with_radius(radius.unwrap_or(DEFAULT_RADIUS))
                .with_fonts(Fonts::new(heading, body));
            writeln!(out, "{}", encode_theme(&state))?;
        }
        Command::Decode { oklch, input } => {
            let format = if oklch { CssFormat::Oklch } else { CssFormat::Hsl };
            out = render_css(&load_theme(&input)?, format);
        }
        Command::Preset(name) => {
            let state = preset(&name)
                .ok_or_else(|| anyhow!("unknown preset `{name}` (try `huekit presets`)"))?;
            writeln!(out, "{}", encode_theme(&state))?;
        }
        Command::Presets => {
            for name in preset_names() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Help => out.push_str(USAGE),
    }
    Ok(out)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_args(&args).and_then(run) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("huekit: {e:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
