//! Chart descriptions in the Plotly figure JSON schema.
//!
//! Only the attributes the dashboard sets are modelled. Field names follow
//! Plotly's own (mostly lowercase, unseparated) spelling so the serialized
//! value can be passed straight to `Plotly.react`.

use serde::{Deserialize, Serialize};

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Data series. Empty for a blank chart.
    pub data: Vec<Trace>,
    /// Titles, axes, annotations.
    pub layout: Layout,
}

impl Figure {
    /// Whether the figure has no data series.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.data.is_empty()
    }
}

/// A single data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Filled regions coloured by value.
    Choropleth(ChoroplethTrace),
    /// Lines and markers.
    Scatter(ScatterTrace),
}

/// Region fill trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    /// Inline `GeoJSON` `FeatureCollection` holding the region shapes.
    pub geojson: serde_json::Value,
    /// Feature property matched against [`locations`](Self::locations).
    pub featureidkey: String,
    /// Region identifiers, one per value.
    pub locations: Vec<String>,
    /// Colour values. `None` leaves the region unfilled.
    pub z: Vec<Option<f64>>,
    /// Lower end of the colour domain.
    pub zmin: Option<f64>,
    /// Upper end of the colour domain.
    pub zmax: Option<f64>,
    /// Named colour scale.
    pub colorscale: String,
    /// Pre-formatted hover content, one per region.
    pub hovertext: Vec<String>,
    /// Hover layout.
    pub hovertemplate: String,
    /// Colour bar legend.
    pub colorbar: ColorBar,
}

/// Colour bar legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBar {
    /// Legend title.
    pub title: Title,
}

/// Line/marker trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    /// Legend entry.
    pub name: String,
    /// Drawing mode, e.g. `lines+markers`.
    pub mode: String,
    /// X values (years).
    pub x: Vec<i32>,
    /// Y values (counts).
    pub y: Vec<f64>,
    /// Line style.
    pub line: Line,
    /// Marker style.
    pub marker: Marker,
    /// Legend group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
}

/// Line style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    /// Dash pattern (`solid`, `dot`, `dash`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
    /// Line colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Marker style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Marker {
    /// Marker symbol (`circle`, `diamond`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Marker colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Text wrapper used for titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Title text.
    pub text: String,
}

impl Title {
    /// Creates a title.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Chart title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Overlaid shapes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    /// X axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// Hover mode, e.g. `x unified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    /// Legend settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// Map view settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    /// Plot margins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Drag behaviour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragmode: Option<String>,
    /// Fixed height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Axis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: Title,
}

/// Legend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    /// Legend title.
    pub title: Title,
}

/// Map view settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLayout {
    /// Fit the view to `locations`.
    pub fitbounds: String,
    /// Whether the base map is drawn.
    pub visible: bool,
    /// Map projection.
    pub projection: Projection,
}

/// Map projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Projection name.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    /// Right.
    pub r: u32,
    /// Top.
    pub t: u32,
    /// Left.
    pub l: u32,
    /// Bottom.
    pub b: u32,
}

/// A layout shape. Only rectangles are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinate system of `x0`/`x1`.
    pub xref: String,
    /// Coordinate system of `y0`/`y1`.
    pub yref: String,
    /// Left edge.
    pub x0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y0: f64,
    /// Top edge.
    pub y1: f64,
    /// Fill colour.
    pub fillcolor: String,
    /// Fill opacity.
    pub opacity: f64,
    /// Draw above or below traces.
    pub layer: String,
    /// Outline.
    pub line: ShapeLine,
}

/// Shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeLine {
    /// Outline width.
    pub width: f64,
}
