//! Piecewise-linear year-to-color interpolation.
//!
//! Mirrors the map's `["interpolate", ["linear"], ["get", "year_i"], ...]`
//! paint expression so that colors computed here match what the map draws.

use vienna_heritage_theme::{ConfigError, validate_breakpoints};
use vienna_heritage_theme_models::{ColorBreakpoint, Rgb, Theme};

/// Fill color for buildings without a known construction year (`#CCCCCC`).
pub const UNKNOWN_YEAR_COLOR: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);

/// Maps a construction year to a color along ascending breakpoints.
///
/// An absent year yields [`UNKNOWN_YEAR_COLOR`]. Years outside the
/// breakpoint range clamp to the first or last color, and a year equal to a
/// breakpoint returns that breakpoint's color exactly. Between two
/// breakpoints each RGB channel is interpolated linearly and rounded.
///
/// `breakpoints` is expected to have passed [`validate_breakpoints`]. An
/// empty slice yields [`UNKNOWN_YEAR_COLOR`].
#[must_use]
pub fn interpolate_color(year: Option<i32>, breakpoints: &[ColorBreakpoint]) -> Rgb {
    let Some(year) = year else {
        return UNKNOWN_YEAR_COLOR;
    };
    let (Some(first), Some(last)) = (breakpoints.first(), breakpoints.last()) else {
        return UNKNOWN_YEAR_COLOR;
    };

    if year <= first.year {
        return first.color;
    }
    if year >= last.year {
        return last.color;
    }

    // first.year < year < last.year, so idx lands in 1..len
    let idx = breakpoints.partition_point(|bp| bp.year <= year);
    let (Some(lower), Some(upper)) = (
        idx.checked_sub(1).and_then(|i| breakpoints.get(i)),
        breakpoints.get(idx),
    ) else {
        return last.color;
    };

    if year == lower.year {
        return lower.color;
    }

    let t = (f64::from(year) - f64::from(lower.year))
        / (f64::from(upper.year) - f64::from(lower.year));

    lerp(lower.color, upper.color, t)
}

fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let [r0, g0, b0] = from.channels();
    let [r1, g1, b1] = to.channels();
    Rgb::new(
        lerp_channel(r0, r1, t),
        lerp_channel(g0, g1, t),
        lerp_channel(b0, b1, t),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

/// A validated, immutable breakpoint sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    breakpoints: Vec<ColorBreakpoint>,
}

impl ColorScale {
    /// Validates and wraps a breakpoint sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the sequence is empty, unsorted, or has
    /// duplicate years.
    pub fn new(breakpoints: Vec<ColorBreakpoint>) -> Result<Self, ConfigError> {
        validate_breakpoints(&breakpoints)?;
        log::debug!(
            "Built color scale with {} breakpoints spanning {:?}..={:?}",
            breakpoints.len(),
            breakpoints.first().map(|bp| bp.year),
            breakpoints.last().map(|bp| bp.year)
        );
        Ok(Self { breakpoints })
    }

    /// Builds the scale of a theme's building colors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the theme's breakpoints are malformed.
    pub fn from_theme(theme: &Theme) -> Result<Self, ConfigError> {
        Self::new(theme.building_colors.clone())
    }

    /// The breakpoints, ascending by year.
    #[must_use]
    pub fn breakpoints(&self) -> &[ColorBreakpoint] {
        &self.breakpoints
    }

    /// Color for a construction year. See [`interpolate_color`].
    #[must_use]
    pub fn color_for(&self, year: Option<i32>) -> Rgb {
        interpolate_color(year, &self.breakpoints)
    }
}
