//! Seam to the GRASS GIS runtime.
//!
//! Coordinate lookup and geometry export are performed by the host GIS
//! tools, not by this crate. The [`Gis`] trait keeps that boundary
//! explicit so the orchestration can be exercised without a GRASS
//! session.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Center of the active computational region, in map coordinates.
///
/// The region is ambient process state in a GRASS session; it is modeled
/// here as an explicit value so the configuration builder has no hidden
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionCenter {
    /// Easting of the region center.
    pub longitude: f64,
    /// Northing of the region center.
    pub latitude: f64,
}

/// Operations delegated to the host GIS runtime.
pub trait Gis {
    /// Queries the center coordinates of the active computational region.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be invoked or its output
    /// does not contain the center coordinates.
    fn region_center(&self) -> Result<RegionCenter>;

    /// Exports a vector map to a GeoJSON file at `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the exporter cannot be invoked or fails.
    fn export_geojson(&self, input: &str, output: &Path) -> Result<()>;
}

/// [`Gis`] implementation that shells out to the GRASS command-line tools.
///
/// Must run inside a GRASS session: both tools rely on the session's
/// mapset and computational region.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassRuntime;

impl GrassRuntime {
    /// Creates a runtime handle.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn run(command: &str, args: &[&str]) -> Result<std::process::Output> {
        log::debug!("running {command} {}", args.join(" "));
        let output = Command::new(command)
            .args(args)
            .output()
            .map_err(|e| Error::Gis {
                command: command.to_string(),
                message: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(Error::Gis {
                command: command.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl Gis for GrassRuntime {
    fn region_center(&self) -> Result<RegionCenter> {
        let output = Self::run("g.region", &["-c", "-g"])?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_region_center(&stdout)
    }

    fn export_geojson(&self, input: &str, output: &Path) -> Result<()> {
        let input_arg = format!("input={input}");
        let output_arg = format!("output={}", output.display());
        // -s skips attribute columns of unsupported types.
        Self::run(
            "v.out.ogr",
            &[&input_arg, &output_arg, "format=GeoJSON", "-s"],
        )?;
        Ok(())
    }
}

/// Parses the `key=value` output of `g.region -cg` into a region center.
fn parse_region_center(output: &str) -> Result<RegionCenter> {
    let mut easting = None;
    let mut northing = None;
    for line in output.lines() {
        if let Some((key, value)) = line.trim().split_once('=') {
            match key {
                "center_easting" => easting = value.parse::<f64>().ok(),
                "center_northing" => northing = value.parse::<f64>().ok(),
                _ => {}
            }
        }
    }
    match (easting, northing) {
        (Some(longitude), Some(latitude)) => Ok(RegionCenter {
            longitude,
            latitude,
        }),
        _ => Err(Error::Gis {
            command: "g.region".to_string(),
            message: "output did not contain region center coordinates".to_string(),
        }),
    }
}

/// Derives the dataset identifier from a vector map name.
///
/// kepler.gl dataset ids cannot contain `@`, so the mapset separator is
/// rewritten.
#[must_use]
pub fn dataset_id(map_name: &str) -> String {
    map_name.replace('@', "__at__")
}
