//! Colour theme for the roster viewer.
//!
//! Themes are defined as TOML files. Both built-in themes are embedded in the
//! binary via [`include_str!`] so the viewer works without any files on disk.
//! Pick one at startup with [`Theme::by_name`] using the `display.theme`
//! config value, and switch at runtime with the `:theme <name>` command.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

/// Names accepted by [`Theme::by_name`], for help text and error messages.
pub const THEME_NAMES: &[&str] = &["default", "gruvbox"];

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawGrid {
    header: RawStyle,
    stripe: RawStyle,
    selected: RawStyle,
    empty: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    text: RawStyle,
    count: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    grid: RawGrid,
    status: RawStatus,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Viewer colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values, so rendering never
/// re-parses colours.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name as given to [`Theme::by_name`].
    pub name: String,

    /// Border style for the grid pane.
    pub border_focused: Style,
    /// Border style for the command bar pane.
    pub border_command_bar: Style,
    /// Border style for inactive panes (help popup frame).
    pub border_unfocused: Style,

    /// Header row of the grid.
    pub header: Style,
    /// Background applied to every other body row.
    pub stripe: Style,
    /// Row under the cursor.
    pub selected: Style,
    /// Placeholder text for missing values.
    pub empty_cell: Style,

    pub status_text: Style,
    /// The record count in the status line.
    pub status_count: Style,
    /// Error pane text and command bar errors.
    pub error: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The `theme` unit tests load
    /// every built-in theme, so this is caught before release.
    pub fn load_default() -> Self {
        Self::from_toml_str("default", DEFAULT_THEME_SRC)
            .expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str("gruvbox", GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a built-in theme by name (case-insensitive).
    ///
    /// Returns `None` for unknown names so callers can decide whether to fall
    /// back or report the error.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(name: &str, src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            name: name.to_string(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            header: raw.grid.header.into_style(),
            stripe: raw.grid.stripe.into_style(),
            selected: raw.grid.selected.into_style(),
            empty_cell: raw.grid.empty.into_style(),
            status_text: raw.status.text.into_style(),
            status_count: raw.status.count.into_style(),
            error: raw.status.error.into_style(),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
