//! The export pass: options in, patched HTML artifact out.
//!
//! This is a single forward pass with no retries and no partial-failure
//! recovery; any collaborator error aborts the run.

use std::fs;

use kepviz::{
    dataset_id, patch_html, render_html, ConfigDocument, Gis, StyleDocument, VisualChannels,
};

use crate::cli::Cli;
use crate::error::CliError;

/// Runs the export pass with the given GIS runtime.
pub fn run(cli: &Cli, gis: &dyn Gis) -> Result<(), CliError> {
    // 1. Derive the dataset identifier and layer label from the map name
    let data_id = dataset_id(&cli.input);
    let data_label = cli.label.clone().unwrap_or_else(|| cli.input.clone());

    // 2. Base configuration skeleton
    let mut config = ConfigDocument::new();

    // 3. Visual channel bindings from the column options
    let channels = VisualChannels::new()
        .with_color_column(cli.color_column.clone())
        .with_stroke_color_column(cli.stroke_color_column.clone())
        .with_height_column(cli.height_column.clone());

    // 4. Style overrides, when a style document was given
    let style = match &cli.style {
        Some(path) => Some(StyleDocument::load(path).map_err(CliError::from)?),
        None => None,
    };

    // 5. The single layer entry
    config.add_layer(&data_id, &data_label, channels, style.as_ref());

    // 6. Tooltip field list; empty means "no columns shown", not "show all"
    let show_columns = match cli.columns.as_deref() {
        None | Some("") => Vec::new(),
        Some(list) => list.split(',').map(str::to_string).collect(),
    };
    config.set_tooltip_fields(&data_id, show_columns);

    // 7. Camera state from the region center and the zoom option
    let center = gis.region_center().map_err(CliError::from)?;
    config.set_map_state(center, cli.zoom);

    // 8. Export the geometry. The file is left behind on purpose; the
    //    GRASS session cleanup owns it.
    let geojson_path = tempfile::Builder::new()
        .prefix("kepviz-")
        .tempdir()?
        .keep()
        .join("export.geojson");
    gis.export_geojson(&cli.input, &geojson_path)
        .map_err(CliError::from)?;

    // 9. Show the assembled document
    if !cli.quiet {
        println!("Using configuration (JSON syntax):");
        println!("{}", config.to_pretty_json().map_err(CliError::from)?);
    }

    // 10. Render the HTML artifact, then patch title and attribution
    let geojson = fs::read_to_string(&geojson_path)?;
    render_html(&config, &data_id, &data_label, &geojson, &cli.output).map_err(CliError::from)?;
    patch_html(&cli.output, &cli.title).map_err(CliError::from)?;

    Ok(())
}
