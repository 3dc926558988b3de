//! Info card and legend data derived from the classifier.

use serde::Serialize;
use vienna_heritage_buildings_models::BuildingRecord;
use vienna_heritage_era_models::{ArchitecturalPeriod, EraFilter};
use vienna_heritage_theme_models::Rgb;

use crate::{ColorScale, build_era_predicate, compute_age};

/// Name shown for buildings the data source left unnamed.
pub const UNNAMED_BUILDING: &str = "Historic Building";

/// Everything the info card shows for one building.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSummary {
    /// Feature identifier, if any.
    pub id: Option<String>,
    /// Display name, falling back to [`UNNAMED_BUILDING`].
    pub name: String,
    /// Construction year.
    pub year_built: Option<i32>,
    /// Age in the reference year. `None` without a construction year.
    pub age: Option<i32>,
    /// Architectural period, serialized as its label. `None` without a
    /// construction year.
    #[serde(serialize_with = "serialize_period_label")]
    pub period: Option<ArchitecturalPeriod>,
    /// Recorded style, falling back to the period label.
    pub style: Option<String>,
    /// Height in meters.
    pub height: Option<f64>,
    /// Fill color under the active theme.
    pub color: Rgb,
}

impl BuildingSummary {
    /// Popup subtitle, e.g. "Built in 1737 • Baroque Period".
    #[must_use]
    pub fn headline(&self) -> Option<String> {
        let year = self.year_built?;
        let period = self.period?;
        Some(format!("Built in {year} • {period} Period"))
    }
}

#[allow(clippy::ref_option)]
fn serialize_period_label<S: serde::Serializer>(
    period: &Option<ArchitecturalPeriod>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    period.map(ArchitecturalPeriod::label).serialize(serializer)
}

/// Derives the info card data for one record.
#[must_use]
pub fn summarize(
    record: &BuildingRecord,
    scale: &ColorScale,
    reference_year: i32,
) -> BuildingSummary {
    let period = record.year_built.map(ArchitecturalPeriod::from_year);

    BuildingSummary {
        id: record.id.clone(),
        name: record
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED_BUILDING.to_string()),
        year_built: record.year_built,
        age: record
            .year_built
            .map(|year| compute_age(year, reference_year)),
        period,
        style: record
            .style
            .clone()
            .or_else(|| period.map(|p| p.label().to_string())),
        height: record.height,
        color: scale.color_for(record.year_built),
    }
}

/// Lazily summarizes the records visible under `filter`, in input order.
pub fn summarize_visible<'a>(
    records: &'a [BuildingRecord],
    filter: EraFilter,
    scale: &'a ColorScale,
    reference_year: i32,
) -> impl Iterator<Item = BuildingSummary> + 'a {
    let visible = build_era_predicate(filter);
    records
        .iter()
        .filter(move |record| visible(record.year_built))
        .map(move |record| summarize(record, scale, reference_year))
}

/// One row of the "Building Age Scale" legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// Breakpoint year.
    pub year: i32,
    /// Breakpoint color.
    pub color: Rgb,
    /// Period the breakpoint year falls in.
    pub period: ArchitecturalPeriod,
}

impl LegendEntry {
    /// Row label, e.g. "1700+ years • Baroque".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}+ years • {}", self.year, self.period)
    }
}

/// Legend rows for a color scale, one per breakpoint.
///
/// Band periods come from the period table, so a band's label does not
/// necessarily match the era filter of the same name.
#[must_use]
pub fn legend(scale: &ColorScale) -> Vec<LegendEntry> {
    scale
        .breakpoints()
        .iter()
        .map(|bp| LegendEntry {
            year: bp.year,
            color: bp.color,
            period: ArchitecturalPeriod::from_year(bp.year),
        })
        .collect()
}
