#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Year-driven classification of historic buildings.
//!
//! Everything the map decides from a building's construction year lives
//! here as pure functions: its fill color ([`interpolate_color`]), its
//! architectural period ([`classify_period`]), its age ([`compute_age`]),
//! and whether the selected era shows it ([`build_era_predicate`]).
//!
//! No function in this crate holds state or performs I/O, so all of them
//! may be called concurrently from any number of threads.

pub mod color;
pub mod style;
pub mod summary;

pub use color::{ColorScale, UNKNOWN_YEAR_COLOR, interpolate_color};
pub use summary::{BuildingSummary, LegendEntry, legend, summarize, summarize_visible};
pub use vienna_heritage_era_models::{ArchitecturalPeriod, EraFilter};

use chrono::Datelike as _;

/// Errors returned by the classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// A required input was missing.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was missing.
        message: String,
    },
}

/// Classifies a construction year into its architectural period.
///
/// # Errors
///
/// Returns [`ClassifierError::InvalidInput`] if `year` is `None`; the
/// classifier does not guess a period for an unknown year.
pub fn classify_period(year: Option<i32>) -> Result<ArchitecturalPeriod, ClassifierError> {
    year.map(ArchitecturalPeriod::from_year)
        .ok_or_else(|| ClassifierError::InvalidInput {
            message: "construction year is required to classify a period".to_string(),
        })
}

/// Age of a building in `reference_year`.
///
/// Future-dated buildings get a negative age; callers decide how to show
/// that.
#[must_use]
pub const fn compute_age(year: i32, reference_year: i32) -> i32 {
    reference_year.saturating_sub(year)
}

/// The current calendar year in local time, for use as the default
/// `reference_year` of [`compute_age`].
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Builds the visibility predicate for an era filter.
///
/// The predicate is cheap to copy and can be applied lazily, or in
/// parallel, over any number of records. An unknown year is only visible
/// under [`EraFilter::All`].
#[must_use]
pub fn build_era_predicate(filter: EraFilter) -> impl Fn(Option<i32>) -> bool + Copy + Send + Sync {
    move |year| filter.contains(year)
}
