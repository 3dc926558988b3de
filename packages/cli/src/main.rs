#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the heritage map classifier.
//!
//! Stands in for the map UI: lists themes, prints legends and `MapLibre`
//! style expressions, and classifies the buildings of a local `GeoJSON`
//! file under a theme and era filter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vienna_heritage_classifier::{
    ColorScale, EraFilter, classify_period, current_year, legend, style, summarize_visible,
};
use vienna_heritage_theme::registry::{DEFAULT_THEME_ID, all_themes, theme_by_id};

#[derive(Parser)]
#[command(name = "vienna_heritage", about = "Historic Vienna building classifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered color themes
    Themes,
    /// Print the building age legend of a theme
    Legend {
        /// Theme identifier
        #[arg(long, default_value = DEFAULT_THEME_ID)]
        theme: String,
    },
    /// Print the architectural period of a year
    Period {
        /// Construction year
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Print the `MapLibre` fill color and filter expressions
    Style {
        /// Theme identifier
        #[arg(long, default_value = DEFAULT_THEME_ID)]
        theme: String,
        /// Era filter (all, medieval, baroque, modern)
        #[arg(long, default_value_t = EraFilter::All)]
        era: EraFilter,
    },
    /// Classify the buildings of a `GeoJSON` file, one JSON line each
    Classify {
        /// `GeoJSON` `FeatureCollection` of buildings
        file: PathBuf,
        /// Theme identifier
        #[arg(long, default_value = DEFAULT_THEME_ID)]
        theme: String,
        /// Era filter (all, medieval, baroque, modern)
        #[arg(long, default_value_t = EraFilter::All)]
        era: EraFilter,
        /// Year ages are computed against (defaults to the current year)
        #[arg(long)]
        reference_year: Option<i32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Themes => {
            for theme in all_themes() {
                println!("{:<12} {} - {}", theme.id, theme.name, theme.description);
            }
        }
        Commands::Legend { theme } => {
            let theme = theme_by_id(&theme)?;
            let scale = ColorScale::from_theme(&theme)?;
            println!("{} - Building Age Scale", theme.name);
            for entry in legend(&scale) {
                println!("  {}  {}", entry.color, entry.label());
            }
        }
        Commands::Period { year } => {
            println!("{}", classify_period(Some(year))?);
        }
        Commands::Style { theme, era } => {
            let scale = ColorScale::from_theme(&theme_by_id(&theme)?)?;
            let expressions = serde_json::json!({
                "fill-color": style::fill_color_expression(&scale),
                "filter": style::era_filter_expression(era),
            });
            println!("{}", serde_json::to_string_pretty(&expressions)?);
        }
        Commands::Classify {
            file,
            theme,
            era,
            reference_year,
        } => {
            let scale = ColorScale::from_theme(&theme_by_id(&theme)?)?;
            let records = vienna_heritage_buildings::load_records(&file)?;
            let reference_year = reference_year.unwrap_or_else(current_year);

            let mut shown = 0_usize;
            for summary in summarize_visible(&records, era, &scale, reference_year) {
                println!("{}", serde_json::to_string(&summary)?);
                shown += 1;
            }

            log::info!(
                "{shown} of {} buildings visible under era '{era}' ({})",
                records.len(),
                era.label()
            );
        }
    }

    Ok(())
}
