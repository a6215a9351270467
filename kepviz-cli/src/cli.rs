//! CLI surface definition.
//!
//! One command, flat option set: the tool does a single forward pass, so
//! there are no subcommands. `--input` and `--output` are required and
//! rejected by clap before any work runs.

use clap::Parser;
use std::path::PathBuf;

/// Create kepler.gl visualizations from GRASS GIS vector maps.
///
/// Runs inside a GRASS session: the map center is taken from the active
/// computational region and the geometry is exported with v.out.ogr.
#[derive(Debug, Parser)]
#[command(name = "kepviz")]
#[command(version, about = "Create kepler.gl visualizations from vector maps", long_about = None)]
pub struct Cli {
    /// Name of the input vector map
    #[arg(long, value_name = "NAME")]
    pub input: String,

    /// Path of the output HTML file
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Column to be used for color
    #[arg(long, value_name = "COLUMN")]
    pub color_column: Option<String>,

    /// Column to be used for stroke color
    #[arg(long, value_name = "COLUMN")]
    pub stroke_color_column: Option<String>,

    /// Column to be used for height
    #[arg(long, value_name = "COLUMN")]
    pub height_column: Option<String>,

    /// Comma-separated list of columns shown in the tooltip
    #[arg(long, value_name = "LIST")]
    pub columns: Option<String>,

    /// Title of the resulting map
    #[arg(long, value_name = "TITLE", default_value = "Generated by kepviz")]
    pub title: String,

    /// Zoom level of the web map (center comes from the computational region)
    #[arg(long, value_name = "LEVEL", default_value_t = 5.0)]
    pub zoom: f64,

    /// Label of the data layer (defaults to the input map name)
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Path to a JSON/YAML/literal style document for the layer
    #[arg(long, value_name = "PATH")]
    pub style: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}
