//! The configuration document and its builder operations.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::VisualChannels;
use crate::error::Result;
use crate::gis::RegionCenter;
use crate::style::StyleDocument;

/// Layer identifier baked into the document.
///
/// Only one layer is possible since the id is hardcoded.
const LAYER_ID: &str = "m1vnv5v";

/// A kepler.gl configuration document.
///
/// Built once per invocation and handed to the renderer; never mutated
/// after hand-off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    version: String,
    config: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapConfig {
    vis_state: VisState,
    map_state: Option<MapState>,
    map_style: MapStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisState {
    filters: Vec<Value>,
    layers: Vec<Layer>,
    interaction_config: InteractionConfig,
    layer_blending: String,
    split_maps: Vec<Value>,
    animation_config: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct InteractionConfig {
    tooltip: TooltipConfig,
    brush: BrushConfig,
    geocoder: ToggleConfig,
    coordinate: ToggleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct TooltipConfig {
    fields_to_show: BTreeMap<String, Vec<String>>,
    enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct BrushConfig {
    size: f64,
    enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ToggleConfig {
    enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnimationConfig {
    current_time: Option<f64>,
    speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapStyle {
    style_type: String,
    top_layer_groups: Map<String, Value>,
    visible_layer_groups: VisibleLayerGroups,
    three_d_building_color: [f64; 3],
    map_styles: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct VisibleLayerGroups {
    label: bool,
    road: bool,
    border: bool,
    building: bool,
    water: bool,
    land: bool,
    #[serde(rename = "3d building")]
    three_d_building: bool,
}

/// Camera state for the web map.
///
/// Derived once from the region center and the zoom option; never
/// recomputed after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapState {
    bearing: i32,
    drag_rotate: bool,
    /// Latitude of the map center, in degrees.
    pub latitude: f64,
    /// Longitude of the map center, in degrees.
    pub longitude: f64,
    pitch: i32,
    /// Zoom level of the web map.
    pub zoom: f64,
    is_split: bool,
}

/// One layer entry in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    id: String,
    #[serde(rename = "type")]
    layer_type: String,
    /// Per-layer display configuration.
    pub config: LayerConfig,
    #[serde(rename = "visualChannels")]
    visual_channels: VisualChannels,
}

/// Display configuration of a layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    /// Identifier of the dataset this layer draws from.
    pub data_id: String,
    /// Human-readable layer label.
    pub label: String,
    color: [u8; 3],
    columns: GeometryColumns,
    is_visible: bool,
    /// Open-ended visual overrides; style documents merge in here.
    pub vis_config: Map<String, Value>,
    hidden: bool,
    text_label: Vec<TextLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct GeometryColumns {
    geojson: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct TextLabel {
    field: Option<Value>,
    color: [u8; 3],
    size: u32,
    offset: [i32; 2],
    anchor: String,
    alignment: String,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDocument {
    /// Returns the fixed-shape skeleton document.
    ///
    /// No layers, no camera state, tooltips enabled with no fields, dark
    /// base map style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: "v1".to_string(),
            config: MapConfig {
                vis_state: VisState {
                    filters: Vec::new(),
                    layers: Vec::new(),
                    interaction_config: InteractionConfig {
                        tooltip: TooltipConfig {
                            fields_to_show: BTreeMap::new(),
                            enabled: true,
                        },
                        brush: BrushConfig {
                            size: 0.5,
                            enabled: false,
                        },
                        geocoder: ToggleConfig { enabled: false },
                        coordinate: ToggleConfig { enabled: false },
                    },
                    layer_blending: "normal".to_string(),
                    split_maps: Vec::new(),
                    animation_config: AnimationConfig {
                        current_time: None,
                        speed: 1,
                    },
                },
                map_state: None,
                map_style: MapStyle {
                    style_type: "dark".to_string(),
                    top_layer_groups: Map::new(),
                    visible_layer_groups: VisibleLayerGroups {
                        label: false,
                        road: true,
                        border: false,
                        building: true,
                        water: true,
                        land: true,
                        three_d_building: false,
                    },
                    three_d_building_color: [
                        9.665_468_314_072_013,
                        17.183_054_780_572_47,
                        31.144_286_789_787_6,
                    ],
                    map_styles: Map::new(),
                },
            },
        }
    }

    /// Adds the layer entry to the document.
    ///
    /// The layer gets the fixed default base color and text label styling.
    /// When a style document is given, its key/value pairs are shallow-merged
    /// into the layer's `visConfig` verbatim; keys are not validated against
    /// any schema.
    pub fn add_layer(
        &mut self,
        data_id: &str,
        label: &str,
        visual_channels: VisualChannels,
        style: Option<&StyleDocument>,
    ) {
        let mut vis_config = Map::new();
        if let Some(style) = style {
            for (key, value) in style.entries() {
                vis_config.insert(key.clone(), value.clone());
            }
        }

        let layer = Layer {
            id: LAYER_ID.to_string(),
            layer_type: "geojson".to_string(),
            config: LayerConfig {
                data_id: data_id.to_string(),
                label: label.to_string(),
                color: [136, 87, 44],
                columns: GeometryColumns {
                    geojson: "_geojson".to_string(),
                },
                is_visible: true,
                vis_config,
                hidden: false,
                text_label: vec![TextLabel {
                    field: None,
                    color: [255, 255, 255],
                    size: 18,
                    offset: [0, 0],
                    anchor: "start".to_string(),
                    alignment: "center".to_string(),
                }],
            },
            visual_channels,
        };

        self.config.vis_state.layers.push(layer);
    }

    /// Sets the tooltip field list for a dataset.
    ///
    /// An empty list means no columns are shown in the tooltip; it does
    /// not mean "show all".
    pub fn set_tooltip_fields(&mut self, data_id: &str, columns: Vec<String>) {
        self.config
            .vis_state
            .interaction_config
            .tooltip
            .fields_to_show
            .insert(data_id.to_string(), columns);
    }

    /// Sets the camera state from the region center and a zoom level.
    ///
    /// Bearing and pitch are fixed at zero and the map is not split.
    pub fn set_map_state(&mut self, center: RegionCenter, zoom: f64) {
        self.config.map_state = Some(MapState {
            bearing: 0,
            drag_rotate: false,
            latitude: center.latitude,
            longitude: center.longitude,
            pitch: 0,
            zoom,
            is_split: false,
        });
    }

    /// The layer entries currently in the document.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.config.vis_state.layers
    }

    /// The camera state, if one has been set.
    #[must_use]
    pub fn map_state(&self) -> Option<&MapState> {
        self.config.map_state.as_ref()
    }

    /// Serializes the document as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
