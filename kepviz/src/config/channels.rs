//! Visual channel bindings for a layer.
//!
//! A visual channel maps a data attribute column to a rendered property
//! (fill color, stroke color, height, ...). Channels without a column stay
//! `null` in the serialized document, which kepler.gl treats as unset.

use serde::Serialize;

/// A `{name, type}` pair binding a source attribute column to a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelBinding {
    /// Name of the attribute column.
    pub name: String,
    /// Value type of the column.
    #[serde(rename = "type")]
    pub value_type: String,
}

impl ChannelBinding {
    /// Binding for an integer-valued column.
    ///
    /// Columns supplied on the command line are always bound as integers;
    /// type inference from the attribute table is left to the exporter.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: "integer".to_string(),
        }
    }
}

/// Per-layer visual channel configuration.
///
/// Only the color, stroke color, and height channels are derived from
/// user input; size and radius are permanently unset. Scales are fixed:
/// quantize for the color channels, linear for the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualChannels {
    color_field: Option<ChannelBinding>,
    color_scale: String,
    size_field: Option<ChannelBinding>,
    size_scale: String,
    stroke_color_field: Option<ChannelBinding>,
    stroke_color_scale: String,
    height_field: Option<ChannelBinding>,
    height_scale: String,
    radius_field: Option<ChannelBinding>,
    radius_scale: String,
}

impl Default for VisualChannels {
    fn default() -> Self {
        Self {
            color_field: None,
            color_scale: "quantize".to_string(),
            size_field: None,
            size_scale: "linear".to_string(),
            stroke_color_field: None,
            stroke_color_scale: "quantize".to_string(),
            height_field: None,
            height_scale: "linear".to_string(),
            radius_field: None,
            radius_scale: "linear".to_string(),
        }
    }
}

impl VisualChannels {
    /// Creates a channel configuration with every channel unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the fill color channel to a column, if one is given.
    #[must_use]
    pub fn with_color_column(mut self, column: Option<String>) -> Self {
        self.color_field = column.map(ChannelBinding::integer);
        self
    }

    /// Binds the stroke color channel to a column, if one is given.
    #[must_use]
    pub fn with_stroke_color_column(mut self, column: Option<String>) -> Self {
        self.stroke_color_field = column.map(ChannelBinding::integer);
        self
    }

    /// Binds the height channel to a column, if one is given.
    #[must_use]
    pub fn with_height_column(mut self, column: Option<String>) -> Self {
        self.height_field = column.map(ChannelBinding::integer);
        self
    }

    /// The bound fill color column, if any.
    #[must_use]
    pub fn color_field(&self) -> Option<&ChannelBinding> {
        self.color_field.as_ref()
    }
}
