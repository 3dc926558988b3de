#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Architectural period and era filter types.
//!
//! This crate defines the fixed architectural period taxonomy used to label
//! Vienna's buildings by construction year, plus the coarse era selector the
//! map uses to show or hide buildings. Both are closed enums so every
//! consumer has to handle every variant.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// One of the nine named architectural periods a construction year falls in.
///
/// Variants are declared oldest first, so the derived [`Ord`] follows
/// chronological order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchitecturalPeriod {
    /// Before 1000
    #[strum(serialize = "Early Medieval")]
    EarlyMedieval,
    /// 1000-1199
    Romanesque,
    /// 1200-1499
    Gothic,
    /// 1500-1599
    Renaissance,
    /// 1600-1749
    Baroque,
    /// 1750-1849
    Classical,
    /// 1850-1899 (Ringstraße era)
    Historicism,
    /// 1900-1949
    Modern,
    /// 1950 onwards
    Contemporary,
}

/// Ascending `(exclusive upper bound, period)` pairs.
///
/// A year belongs to the first entry whose bound exceeds it. Years at or
/// past the last bound fall through to [`ArchitecturalPeriod::Contemporary`].
pub const PERIOD_THRESHOLDS: &[(i32, ArchitecturalPeriod)] = &[
    (1000, ArchitecturalPeriod::EarlyMedieval),
    (1200, ArchitecturalPeriod::Romanesque),
    (1500, ArchitecturalPeriod::Gothic),
    (1600, ArchitecturalPeriod::Renaissance),
    (1750, ArchitecturalPeriod::Baroque),
    (1850, ArchitecturalPeriod::Classical),
    (1900, ArchitecturalPeriod::Historicism),
    (1950, ArchitecturalPeriod::Modern),
];

impl ArchitecturalPeriod {
    /// Classifies a construction year. Total over all integers.
    #[must_use]
    pub fn from_year(year: i32) -> Self {
        PERIOD_THRESHOLDS
            .iter()
            .find(|(upper, _)| year < *upper)
            .map_or(Self::Contemporary, |(_, period)| *period)
    }

    /// Human-readable label (e.g. "Early Medieval").
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Returns all variants of this enum, oldest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::EarlyMedieval,
            Self::Romanesque,
            Self::Gothic,
            Self::Renaissance,
            Self::Baroque,
            Self::Classical,
            Self::Historicism,
            Self::Modern,
            Self::Contemporary,
        ]
    }
}

/// Buildings before this year count as medieval.
pub const MEDIEVAL_END: i32 = 1500;
/// First year of the baroque era filter (inclusive).
pub const BAROQUE_START: i32 = 1600;
/// Last year of the baroque era filter (inclusive).
pub const BAROQUE_END: i32 = 1750;
/// First year of the modern era filter (inclusive).
pub const MODERN_START: i32 = 1850;

/// Coarse era selector used to show or hide buildings on the map.
///
/// The bounds here are independent of [`PERIOD_THRESHOLDS`]: the baroque
/// filter includes 1750 even though the period table already calls that
/// year [`ArchitecturalPeriod::Classical`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EraFilter {
    /// Every building, including those without a known year
    #[default]
    All,
    /// Built before 1500
    Medieval,
    /// Built 1600-1750 inclusive
    Baroque,
    /// Built 1850 or later
    Modern,
}

impl EraFilter {
    /// Whether a building with the given construction year passes this
    /// filter. An unknown year only passes [`EraFilter::All`].
    #[must_use]
    #[allow(clippy::manual_range_contains)]
    pub const fn contains(self, year: Option<i32>) -> bool {
        match (self, year) {
            (Self::All, _) => true,
            (_, None) => false,
            (Self::Medieval, Some(year)) => year < MEDIEVAL_END,
            (Self::Baroque, Some(year)) => year >= BAROQUE_START && year <= BAROQUE_END,
            (Self::Modern, Some(year)) => year >= MODERN_START,
        }
    }

    /// Label shown next to the filter's radio button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Periods",
            Self::Medieval => "Medieval (< 1500)",
            Self::Baroque => "Baroque (1600-1750)",
            Self::Modern => "Modern (1850+)",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::Medieval, Self::Baroque, Self::Modern]
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn period_table_boundaries() {
        let cases = [
            (999, ArchitecturalPeriod::EarlyMedieval),
            (1000, ArchitecturalPeriod::Romanesque),
            (1199, ArchitecturalPeriod::Romanesque),
            (1200, ArchitecturalPeriod::Gothic),
            (1499, ArchitecturalPeriod::Gothic),
            (1500, ArchitecturalPeriod::Renaissance),
            (1599, ArchitecturalPeriod::Renaissance),
            (1600, ArchitecturalPeriod::Baroque),
            (1749, ArchitecturalPeriod::Baroque),
            (1750, ArchitecturalPeriod::Classical),
            (1849, ArchitecturalPeriod::Classical),
            (1850, ArchitecturalPeriod::Historicism),
            (1899, ArchitecturalPeriod::Historicism),
            (1900, ArchitecturalPeriod::Modern),
            (1949, ArchitecturalPeriod::Modern),
            (1950, ArchitecturalPeriod::Contemporary),
        ];
        for (year, expected) in cases {
            assert_eq!(
                ArchitecturalPeriod::from_year(year),
                expected,
                "year {year}"
            );
        }
    }

    #[test]
    fn period_is_total_at_extremes() {
        assert_eq!(
            ArchitecturalPeriod::from_year(i32::MIN),
            ArchitecturalPeriod::EarlyMedieval
        );
        assert_eq!(
            ArchitecturalPeriod::from_year(i32::MAX),
            ArchitecturalPeriod::Contemporary
        );
    }

    #[test]
    fn period_is_monotonic_in_year() {
        let mut previous = ArchitecturalPeriod::from_year(-500);
        for year in -500..=2500 {
            let current = ArchitecturalPeriod::from_year(year);
            assert!(current >= previous, "period went backwards at {year}");
            previous = current;
        }
    }

    #[test]
    fn every_period_is_reachable() {
        for period in ArchitecturalPeriod::all() {
            assert!(
                (0..=2100).any(|year| ArchitecturalPeriod::from_year(year) == *period),
                "{period:?} is never produced"
            );
        }
    }

    #[test]
    fn thresholds_are_strictly_ascending() {
        for pair in PERIOD_THRESHOLDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn period_labels() {
        assert_eq!(ArchitecturalPeriod::EarlyMedieval.label(), "Early Medieval");
        assert_eq!(ArchitecturalPeriod::Historicism.to_string(), "Historicism");
        assert_eq!(
            ArchitecturalPeriod::from_str("Early Medieval").unwrap(),
            ArchitecturalPeriod::EarlyMedieval
        );
    }

    #[test]
    fn all_filter_accepts_everything() {
        assert!(EraFilter::All.contains(None));
        assert!(EraFilter::All.contains(Some(i32::MIN)));
        assert!(EraFilter::All.contains(Some(3000)));
    }

    #[test]
    fn era_filter_boundaries() {
        assert!(EraFilter::Medieval.contains(Some(1499)));
        assert!(!EraFilter::Medieval.contains(Some(1500)));

        assert!(!EraFilter::Baroque.contains(Some(1599)));
        assert!(EraFilter::Baroque.contains(Some(1600)));
        assert!(EraFilter::Baroque.contains(Some(1750)));
        assert!(!EraFilter::Baroque.contains(Some(1751)));

        assert!(!EraFilter::Modern.contains(Some(1849)));
        assert!(EraFilter::Modern.contains(Some(1850)));
    }

    #[test]
    fn unknown_year_only_passes_all() {
        for filter in EraFilter::all() {
            assert_eq!(filter.contains(None), *filter == EraFilter::All);
        }
    }

    #[test]
    fn era_filter_parses_lowercase() {
        assert_eq!(EraFilter::from_str("baroque").unwrap(), EraFilter::Baroque);
        assert_eq!(EraFilter::Modern.to_string(), "modern");
        assert!(EraFilter::from_str("rococo").is_err());
        assert_eq!(EraFilter::default(), EraFilter::All);
    }
}
