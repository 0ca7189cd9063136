#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line tools for the health map core.
//!
//! Wraps the overlay derivation and chat text processing in a small
//! binary so the same logic the dashboard uses can run headless against
//! backend JSON exports: `overlays` derives desert zones and region
//! polygons, `tokenize` prints the block structure of a reply, and
//! `speak` prints its speakable reduction.

use std::collections::BTreeMap;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use health_map_facility_models::{FacilityMapData, FacilityPoint, RegionStat};
use health_map_geospatial::overlays;
use health_map_geospatial_models::{DesertZone, RegionPolygon};
use serde::Serialize;
use thiserror::Error;

/// Errors at the file and JSON boundary of the CLI.
#[derive(Debug, Error)]
enum CliError {
    /// Reading an input file or stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file did not contain the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "health_map_cli", about = "Health map overlay and chat text tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive desert zones and region polygons from backend JSON exports
    Overlays {
        /// Region-stats JSON: region name -> stats object
        #[arg(long)]
        region_stats: PathBuf,
        /// Map-data JSON: array of facility records
        #[arg(long)]
        map_data: PathBuf,
    },
    /// Tokenize reply text into renderable blocks, printed as JSON
    Tokenize {
        /// File to read instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Reduce reply text to its speakable form
    Speak {
        /// File to read instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Combined overlay payload, shaped like the map layer's props.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlayOutput {
    desert_zones: Vec<DesertZone>,
    region_polygons: Vec<RegionPolygon>,
}

fn read_text(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run_overlays(region_stats_path: &Path, map_data_path: &Path) -> Result<(), CliError> {
    let region_stats: BTreeMap<String, RegionStat> =
        serde_json::from_str(&std::fs::read_to_string(region_stats_path)?)?;
    let map_data: Vec<FacilityMapData> =
        serde_json::from_str(&std::fs::read_to_string(map_data_path)?)?;
    log::info!(
        "loaded {} regions and {} facility records",
        region_stats.len(),
        map_data.len()
    );

    let points: Vec<FacilityPoint> = map_data.iter().map(FacilityMapData::point).collect();
    let output = OverlayOutput {
        desert_zones: overlays::derive_desert_zones(&region_stats),
        region_polygons: overlays::derive_region_polygons(&region_stats, &points),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<(), CliError> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Overlays {
            region_stats,
            map_data,
        } => run_overlays(&region_stats, &map_data)?,
        Commands::Tokenize { file } => {
            let text = read_text(file.as_deref())?;
            let blocks = health_map_chat::markdown::tokenize(&text);
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Commands::Speak { file } => {
            let text = read_text(file.as_deref())?;
            println!("{}", health_map_chat::speech::speakable_prompt(&text));
        }
    }

    Ok(())
}
