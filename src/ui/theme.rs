//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes are TOML documents, either built in or loaded from a file,
//! with hex colors that are turned into 24-bit ANSI escapes at render time.
//!
//! # Built-in Themes
//!
//! - `ocean`: dark blue palette (default)
//! - `slate`: neutral grey palette with violet accents
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6f1ff"
//! header_bg = "#1d3b5a"        # optional
//! text_normal = "#d8e2ec"
//! text_dim = "#7f93a8"
//! border = "#34506b"
//! accent = "#4fa3e0"
//! input_fg = "#e6f1ff"
//! input_focus_fg = "#7cc4ff"
//! button_fg = "#0b1a2a"
//! button_bg = "#4fa3e0"
//! button_disabled_bg = "#46586b"
//! price_fg = "#6fd3a0"
//! error_fg = "#ff7a85"
//! skeleton_fg = "#2a4157"
//! empty_state_fg = "#7cc4ff"
//! ```
//!
//! # Example
//!
//! ```rust
//! use product_manager::ui::Theme;
//!
//! let theme = Theme::from_name("slate").unwrap();
//! let styled = format!("{}{}Products{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset());
//! assert!(styled.contains("Products"));
//! ```

use crate::domain::{ProductManagerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#7cc4ff"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub header_fg: String,
    /// Optional title bar background.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text: subtitles, id labels, footer.
    pub text_dim: String,

    /// Section separators.
    pub border: String,

    /// Section titles and the refresh control.
    pub accent: String,

    pub input_fg: String,
    /// Label and cursor of the focused input.
    pub input_focus_fg: String,

    pub button_fg: String,
    pub button_bg: String,
    /// Button background while the form is disabled.
    pub button_disabled_bg: String,

    pub price_fg: String,
    /// Form error and load notice.
    pub error_fg: String,
    /// Loading placeholder blocks.
    pub skeleton_fg: String,
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "ocean" => include_str!("../../themes/ocean.toml"),
            "slate" => include_str!("../../themes/slate.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ProductManagerError::Theme`] if the file cannot be read or
    /// does not parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ProductManagerError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| ProductManagerError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to RGB. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `ocean` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which a unit test rules out.
    fn default() -> Self {
        Self::from_name("ocean").expect("built-in ocean theme should always parse")
    }
}
