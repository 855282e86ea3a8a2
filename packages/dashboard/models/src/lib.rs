#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart description, UI state and event types for the county crime
//! dashboard.
//!
//! The browser owns the session state ([`DashboardState`]) and sends it
//! along with every [`UiEvent`]. The server answers with the new state and
//! the [`Figure`]s that the triggering control affects.

pub mod figure;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

pub use figure::Figure;

/// Inclusive year interval selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year (inclusive).
    pub start: i32,
    /// Last year (inclusive).
    pub end: i32,
}

impl YearRange {
    /// Creates a range, swapping the bounds if they are inverted.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the same range with `start <= end`.
    #[must_use]
    pub const fn normalized(self) -> Self {
        Self::new(self.start, self.end)
    }

    /// Whether `year` lies inside the range.
    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

/// Everything the charts depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Year range on the slider.
    pub year_range: YearRange,
    /// Selected counties, in selection order.
    pub selected_counties: Vec<String>,
}

/// Controls that can trigger a redraw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Control {
    /// Dual-handle year range slider.
    YearSlider,
    /// Multi-select county picker.
    CountyPicker,
    /// Clicks on the choropleth map.
    Map,
}

/// Chart panels on the page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartTarget {
    /// Choropleth of the mean safety index.
    ChoroplethMap,
    /// Registered crime count per selected county.
    TrendChart,
    /// Case count per crime type and county.
    DetailedTypeTrendChart,
}

impl ChartTarget {
    /// Every chart, in page order.
    pub const ALL: &[Self] = &[
        Self::ChoroplethMap,
        Self::TrendChart,
        Self::DetailedTypeTrendChart,
    ];
}

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiEvent {
    /// The year slider was moved.
    YearRangeChanged {
        /// New first year.
        start: i32,
        /// New last year.
        end: i32,
    },
    /// The county picker value was edited directly.
    CountiesChanged {
        /// The picker's full new value.
        counties: Vec<String>,
    },
    /// A map region (or empty map area) was clicked.
    MapClicked {
        /// Name of the clicked county, if any.
        county: Option<String>,
    },
}

impl UiEvent {
    /// The control this event originates from.
    #[must_use]
    pub const fn control(&self) -> Control {
        match self {
            Self::YearRangeChanged { .. } => Control::YearSlider,
            Self::CountiesChanged { .. } => Control::CountyPicker,
            Self::MapClicked { .. } => Control::Map,
        }
    }
}

/// Body of a dispatch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    /// State before the event.
    pub state: DashboardState,
    /// The interaction.
    pub event: UiEvent,
}

/// A redrawn chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedChart {
    /// Panel to draw into.
    pub target: ChartTarget,
    /// Chart description.
    pub figure: Figure,
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    /// State after the event.
    pub state: DashboardState,
    /// Charts affected by the event's control.
    pub charts: Vec<RenderedChart>,
}

/// Year range slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSliderSpec {
    /// Lowest selectable year.
    pub min: i32,
    /// Highest selectable year.
    pub max: i32,
    /// Slider step.
    pub step: i32,
    /// Initial selection.
    pub value: YearRange,
    /// Years that get a labelled tick.
    pub marks: Vec<i32>,
}

/// County picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyPickerSpec {
    /// Selectable county names, sorted.
    pub options: Vec<String>,
    /// Initial selection.
    pub value: Vec<String>,
}

/// Initial configuration of every control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsSpec {
    /// Year range slider.
    pub year_slider: YearSliderSpec,
    /// County picker.
    pub county_picker: CountyPickerSpec,
}
