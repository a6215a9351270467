#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # kepviz
//!
//! A library for building kepler.gl visualizations from GRASS GIS vector
//! maps.
//!
//! The heavy lifting is all delegated: geometry export and coordinate
//! lookup to the GRASS tools, rendering to kepler.gl itself. What lives
//! here is the assembly of the configuration document that ties them
//! together:
//!
//! - [`ConfigDocument`] and [`VisualChannels`]: the kepler.gl
//!   configuration model and its builder operations
//! - [`StyleDocument`]: user-supplied layer style overrides
//!   (JSON, YAML, or Python-literal files)
//! - [`Gis`] and [`GrassRuntime`]: the seam to the host GIS runtime
//! - [`render_html`] and [`patch_html`]: the HTML artifact
//!
//! ## Examples
//!
//! ```
//! use kepviz::{ConfigDocument, RegionCenter, VisualChannels};
//!
//! let channels = VisualChannels::new().with_color_column(Some("GEO_ID".to_string()));
//!
//! let mut config = ConfigDocument::new();
//! config.add_layer("geology", "Geology", channels, None);
//! config.set_tooltip_fields("geology", vec!["GEO_NAME".to_string()]);
//! config.set_map_state(RegionCenter { longitude: -78.6, latitude: 35.7 }, 5.0);
//!
//! assert_eq!(config.layers().len(), 1);
//! assert!(config.map_state().is_some());
//! ```

pub mod config;
pub mod error;
pub mod gis;
pub mod logging;
pub mod render;
pub mod style;

// Re-export key types at crate root for convenience
pub use config::{ChannelBinding, ConfigDocument, Layer, LayerConfig, MapState, VisualChannels};
pub use error::{Error, Result};
pub use gis::{dataset_id, Gis, GrassRuntime, RegionCenter};
pub use logging::{init_logger, LogLevel};
pub use render::{patch_html, render_html};
pub use style::StyleDocument;
