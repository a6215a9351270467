//! kepler.gl configuration document model.
//!
//! The document mirrors the JSON schema kepler.gl consumes: a `version`
//! marker and a `config` block holding visual state, camera state, and the
//! base map style. Construction is a forward pass: start from the fixed
//! skeleton, add the single layer, assign tooltip fields, set the camera.

mod channels;
mod document;

pub use channels::{ChannelBinding, VisualChannels};
pub use document::{ConfigDocument, Layer, LayerConfig, MapState};
