//! Rendering of the HTML artifact and its post-processing.
//!
//! The page itself is the work of kepler.gl, loaded from a CDN; this
//! module only injects the configuration document and the exported
//! GeoJSON into the embedded page template and applies the two literal
//! substitutions (page title, attribution) afterwards.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::config::ConfigDocument;
use crate::error::Result;

const TEMPLATE: &str = include_str!("kepler_template.html");

/// Renders the standalone kepler.gl page to `output`.
///
/// The configuration document and the GeoJSON payload are embedded as
/// JSON; the dataset is registered under `data_id` with the given label.
///
/// # Errors
///
/// Returns an error if the template fails to render or the file cannot
/// be written.
pub fn render_html(
    config: &ConfigDocument,
    data_id: &str,
    label: &str,
    geojson: &str,
    output: &Path,
) -> Result<()> {
    let handlebars = Handlebars::new();
    let page = handlebars.render_template(
        TEMPLATE,
        // Everything lands inside a <script> block, so all values are
        // injected JSON-encoded through triple-stache placeholders;
        // handlebars HTML escaping would corrupt them.
        &json!({
            "config": serde_json::to_string(config)?,
            "data_id": serde_json::to_string(data_id)?,
            "label": serde_json::to_string(label)?,
            "data": geojson,
        }),
    )?;
    fs::write(output, page)?;
    log::debug!("wrote {}", output.display());
    Ok(())
}

/// Patches the rendered page with the map title.
///
/// The file is rewritten in place line by line with exactly two literal
/// substitutions: the stock page title and the attribution string.
///
/// # Errors
///
/// Returns an error if the file cannot be read or rewritten.
pub fn patch_html(path: &Path, title: &str) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let mut patched = String::with_capacity(contents.len());
    for line in contents.split_inclusive('\n') {
        let line = line.replace(
            "<title>Kepler.gl</title>",
            &format!("<title>{title} &ndash; GRASS GIS Kepler.gl</title>"),
        );
        let line = line.replace("Kepler.gl Jupyter", title);
        patched.push_str(&line);
    }
    fs::write(path, patched)?;
    Ok(())
}
