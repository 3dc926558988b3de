//! Compile-time registry of map color themes.
//!
//! Each entry is a `(id, toml_content)` pair embedded via `include_str!`.
//! Adding a theme requires creating a TOML file in `themes/` and adding a
//! corresponding entry here.

use vienna_heritage_theme_models::Theme;

use crate::{ConfigError, parse_theme_toml};

/// Theme used when the caller does not pick one.
pub const DEFAULT_THEME_ID: &str = "historical";

/// Embedded TOML theme definitions, in picker order.
const THEME_TOMLS: &[(&str, &str)] = &[
    ("historical", include_str!("../themes/historical.toml")),
    ("baroque", include_str!("../themes/baroque.toml")),
    ("modern", include_str!("../themes/modern.toml")),
];

/// Returns all registered themes.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse or validate. Since these
/// are compile-time constants, failures indicate a development error and
/// are caught by the tests below.
#[must_use]
pub fn all_themes() -> Vec<Theme> {
    THEME_TOMLS
        .iter()
        .map(|(id, toml_str)| {
            parse_theme_toml(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse theme '{id}': {e}"))
        })
        .collect()
}

/// Returns the identifiers of all registered themes.
#[must_use]
pub fn theme_ids() -> Vec<&'static str> {
    THEME_TOMLS.iter().map(|(id, _)| *id).collect()
}

/// Loads a single registered theme by identifier.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownTheme`] if no theme has this identifier,
/// or a parse/validation error from [`parse_theme_toml`].
pub fn theme_by_id(id: &str) -> Result<Theme, ConfigError> {
    let (_, toml_str) = THEME_TOMLS
        .iter()
        .find(|(theme_id, _)| *theme_id == id)
        .ok_or_else(|| ConfigError::UnknownTheme { id: id.to_string() })?;

    parse_theme_toml(toml_str)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use vienna_heritage_theme_models::Rgb;

    use super::*;

    #[test]
    fn loads_all_themes() {
        let themes = all_themes();
        assert_eq!(themes.len(), THEME_TOMLS.len());
    }

    #[test]
    fn theme_ids_match_file_keys() {
        for (key, toml_str) in THEME_TOMLS {
            let theme = parse_theme_toml(toml_str).unwrap();
            assert_eq!(theme.id(), *key, "Theme file for '{key}' declares another id");
        }
    }

    #[test]
    fn theme_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for theme in &all_themes() {
            assert!(seen.insert(theme.id.clone()), "Duplicate theme ID: {}", theme.id);
        }
    }

    #[test]
    fn all_themes_share_breakpoint_years() {
        for theme in &all_themes() {
            let years: Vec<i32> = theme.building_colors.iter().map(|bp| bp.year).collect();
            assert_eq!(
                years,
                [800, 1200, 1500, 1700, 1800, 1900, 2000],
                "Theme {} has unexpected breakpoint years",
                theme.id
            );
        }
    }

    #[test]
    fn default_theme_is_registered() {
        let theme = theme_by_id(DEFAULT_THEME_ID).unwrap();
        assert_eq!(theme.name(), "Imperial Vienna");
        assert_eq!(
            theme.building_colors[0].color,
            Rgb::new(0x8B, 0x45, 0x13)
        );
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(matches!(
            theme_by_id("rococo"),
            Err(ConfigError::UnknownTheme { id }) if id == "rococo"
        ));
    }
}
