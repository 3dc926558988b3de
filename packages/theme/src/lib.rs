#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Theme configuration loading and validation.
//!
//! Themes are TOML documents describing the UI palette and the year-based
//! building color breakpoints. Breakpoint sequences are validated when a
//! theme is loaded; malformed sequences are rejected, never repaired.

pub mod registry;

use vienna_heritage_theme_models::{ColorBreakpoint, Theme};

/// Errors that can occur while loading or validating a theme.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The breakpoint sequence has no entries.
    #[error("Breakpoint sequence is empty")]
    Empty,

    /// Two breakpoints share the same year.
    #[error("Duplicate breakpoint year {year} at index {index}")]
    DuplicateYear {
        /// The repeated year.
        year: i32,
        /// Index of the second occurrence.
        index: usize,
    },

    /// A breakpoint's year is lower than its predecessor's.
    #[error("Breakpoint year {year} at index {index} is below the previous year {previous}")]
    NotAscending {
        /// Year of the preceding breakpoint.
        previous: i32,
        /// The out-of-order year.
        year: i32,
        /// Index of the out-of-order breakpoint.
        index: usize,
    },

    /// TOML parse error (including malformed colors).
    #[error("Theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// No registered theme has the requested identifier.
    #[error("Unknown theme: {id}")]
    UnknownTheme {
        /// The requested identifier.
        id: String,
    },
}

/// Checks that a breakpoint sequence is non-empty and strictly ascending by
/// year.
///
/// # Errors
///
/// Returns [`ConfigError::Empty`], [`ConfigError::DuplicateYear`], or
/// [`ConfigError::NotAscending`] for the first problem found.
pub fn validate_breakpoints(breakpoints: &[ColorBreakpoint]) -> Result<(), ConfigError> {
    if breakpoints.is_empty() {
        return Err(ConfigError::Empty);
    }

    for (index, pair) in breakpoints.windows(2).enumerate() {
        let (previous, current) = (pair[0].year, pair[1].year);
        if current == previous {
            return Err(ConfigError::DuplicateYear {
                year: current,
                index: index + 1,
            });
        }
        if current < previous {
            return Err(ConfigError::NotAscending {
                previous,
                year: current,
                index: index + 1,
            });
        }
    }

    if breakpoints.len() == 1 {
        log::warn!(
            "Breakpoint sequence has a single entry; every year maps to {}",
            breakpoints[0].color
        );
    }

    Ok(())
}

/// Parses a theme from TOML and validates its breakpoints.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a color is
/// not a hex color, or a validation error from [`validate_breakpoints`].
pub fn parse_theme_toml(toml_str: &str) -> Result<Theme, ConfigError> {
    let theme: Theme = toml::de::from_str(toml_str)?;
    validate_breakpoints(&theme.building_colors)?;
    log::debug!(
        "Loaded theme '{}' with {} breakpoints",
        theme.id,
        theme.building_colors.len()
    );
    Ok(theme)
}
