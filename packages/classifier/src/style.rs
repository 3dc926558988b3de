//! `MapLibre` style expressions for the building layers.
//!
//! The map evaluates these on the GPU side, so they have to agree with
//! [`crate::interpolate_color`] and [`crate::build_era_predicate`]. Both
//! read the construction year from the `year_i` feature property.

use serde_json::{Value, json};
use vienna_heritage_buildings_models::YEAR_PROPERTY;
use vienna_heritage_era_models::{BAROQUE_END, BAROQUE_START, EraFilter, MEDIEVAL_END, MODERN_START};

use crate::{ColorScale, UNKNOWN_YEAR_COLOR};

/// `fill-color` paint expression for a color scale.
#[must_use]
pub fn fill_color_expression(scale: &ColorScale) -> Value {
    let mut interpolate = vec![
        json!("interpolate"),
        json!(["linear"]),
        json!(["get", YEAR_PROPERTY]),
    ];
    for bp in scale.breakpoints() {
        interpolate.push(json!(bp.year));
        interpolate.push(json!(bp.color.to_string()));
    }

    json!([
        "case",
        ["has", YEAR_PROPERTY],
        interpolate,
        UNKNOWN_YEAR_COLOR.to_string()
    ])
}

/// Layer `filter` expression for an era. [`EraFilter::All`] is `true`.
#[must_use]
pub fn era_filter_expression(filter: EraFilter) -> Value {
    let year = json!(["get", YEAR_PROPERTY]);
    let has_year = json!(["has", YEAR_PROPERTY]);

    match filter {
        EraFilter::All => json!(true),
        EraFilter::Medieval => json!(["all", has_year, ["<", year, MEDIEVAL_END]]),
        EraFilter::Baroque => json!([
            "all",
            has_year,
            [">=", year, BAROQUE_START],
            ["<=", year, BAROQUE_END]
        ]),
        EraFilter::Modern => json!(["all", has_year, [">=", year, MODERN_START]]),
    }
}

#[cfg(test)]
mod tests {
    use vienna_heritage_theme_models::{ColorBreakpoint, Rgb};

    use super::*;

    #[test]
    fn fill_color_flattens_breakpoints() {
        let scale = ColorScale::new(vec![
            ColorBreakpoint::new(800, Rgb::new(0x8B, 0x45, 0x13)),
            ColorBreakpoint::new(1200, Rgb::new(0xA0, 0x52, 0x2D)),
        ])
        .unwrap();

        assert_eq!(
            fill_color_expression(&scale),
            json!([
                "case",
                ["has", "year_i"],
                ["interpolate", ["linear"], ["get", "year_i"], 800, "#8B4513", 1200, "#A0522D"],
                "#CCCCCC"
            ])
        );
    }

    #[test]
    fn all_era_is_unfiltered() {
        assert_eq!(era_filter_expression(EraFilter::All), json!(true));
    }

    #[test]
    fn baroque_era_is_inclusive_range() {
        assert_eq!(
            era_filter_expression(EraFilter::Baroque),
            json!([
                "all",
                ["has", "year_i"],
                [">=", ["get", "year_i"], 1600],
                ["<=", ["get", "year_i"], 1750]
            ])
        );
    }

    #[test]
    fn medieval_and_modern_eras() {
        assert_eq!(
            era_filter_expression(EraFilter::Medieval),
            json!(["all", ["has", "year_i"], ["<", ["get", "year_i"], 1500]])
        );
        assert_eq!(
            era_filter_expression(EraFilter::Modern),
            json!(["all", ["has", "year_i"], [">=", ["get", "year_i"], 1850]])
        );
    }
}
