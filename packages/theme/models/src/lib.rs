#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Color and theme configuration types.
//!
//! A [`Theme`] bundles the presentation colors of the map UI with the
//! ordered [`ColorBreakpoint`] sequence that drives year-based building
//! coloring. Themes are deserialized from TOML and treated as immutable
//! values afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel sRGB color.
///
/// Parses from `#RRGGBB` or `#RGB` and displays as uppercase `#RRGGBB`.
/// Serialized as that hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an `[r, g, b]` array.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColorError {
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                Ok(Self {
                    r: channel(0).map_err(|_| invalid())?,
                    g: channel(2).map_err(|_| invalid())?,
                    b: channel(4).map_err(|_| invalid())?,
                })
            }
            3 => {
                // `#abc` is shorthand for `#aabbcc`
                let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
                Ok(Self {
                    r: channel(0).map_err(|_| invalid())?,
                    g: channel(1).map_err(|_| invalid())?,
                    b: channel(2).map_err(|_| invalid())?,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = InvalidColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Error returned when a string is not a `#RRGGBB` or `#RGB` hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for InvalidColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color {:?}: expected #RRGGBB or #RGB",
            self.value
        )
    }
}

impl std::error::Error for InvalidColorError {}

/// A `(year, color)` anchor for piecewise-linear building coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBreakpoint {
    /// Construction year this color is pinned to.
    pub year: i32,
    /// Color at exactly that year.
    pub color: Rgb,
}

impl ColorBreakpoint {
    /// Creates a breakpoint.
    #[must_use]
    pub const fn new(year: i32, color: Rgb) -> Self {
        Self { year, color }
    }
}

/// Presentation colors of the map UI.
///
/// These are opaque CSS values (gradients, `rgba(...)`, hex) handed to the
/// presentation layer as-is; nothing in the workspace interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Page background.
    pub background: String,
    /// Opaque card background.
    pub card_bg: String,
    /// Translucent card background used behind blur.
    pub card_bg_glass: String,
    /// Primary accent (buttons, icons).
    pub primary: String,
    /// Secondary accent.
    pub secondary: String,
    /// Tertiary accent.
    pub accent: String,
    /// Body text.
    pub text: String,
    /// De-emphasized text.
    pub text_light: String,
    /// Card borders.
    pub border: String,
    /// Card drop shadows.
    pub shadow: String,
}

/// A named visual theme, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique theme identifier (e.g. `"historical"`).
    pub id: String,
    /// Human-readable name (e.g. "Imperial Vienna").
    pub name: String,
    /// One-line description shown in the theme picker.
    pub description: String,
    /// UI colors.
    pub colors: ThemeColors,
    /// Year-to-color breakpoints, ascending by year.
    pub building_colors: Vec<ColorBreakpoint>,
}

impl Theme {
    /// Returns the theme identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        let color: Rgb = "#8B4513".parse().unwrap();
        assert_eq!(color, Rgb::new(0x8B, 0x45, 0x13));
    }

    #[test]
    fn parses_lowercase_and_short_hex() {
        assert_eq!("#ff6347".parse::<Rgb>().unwrap(), Rgb::new(255, 99, 71));
        assert_eq!("#ccc".parse::<Rgb>().unwrap(), Rgb::new(204, 204, 204));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["8B4513", "#8B451", "#GGGGGG", "", "#", "#+1+2+3", "rgb(1,2,3)"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn displays_uppercase_hex() {
        assert_eq!(Rgb::new(0x2f, 0x1b, 0x14).to_string(), "#2F1B14");
    }

    #[test]
    fn breakpoint_serializes_color_as_hex() {
        let bp = ColorBreakpoint::new(1700, Rgb::new(0xDA, 0xA5, 0x20));
        let json = serde_json::to_value(bp).unwrap();
        assert_eq!(json, serde_json::json!({"year": 1700, "color": "#DAA520"}));

        let back: ColorBreakpoint = serde_json::from_value(json).unwrap();
        assert_eq!(back, bp);
    }

    #[test]
    fn invalid_color_in_json_is_an_error() {
        let result: Result<ColorBreakpoint, _> =
            serde_json::from_value(serde_json::json!({"year": 1700, "color": "gold"}));
        assert!(result.is_err());
    }
}
