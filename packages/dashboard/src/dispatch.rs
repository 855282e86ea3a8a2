//! Maps UI events to state changes and chart redraws.
//!
//! Each event is handled synchronously: update the state, then re-render
//! every chart the triggering control feeds, as listed in
//! [`DISPATCH_TABLE`].

use std::collections::BTreeSet;

use hu_crime_map_crime_models::CAPITAL_COUNTY;
use hu_crime_map_dashboard_models::{
    ChartTarget, Control, ControlsSpec, CountyPickerSpec, DashboardState, DispatchResponse,
    Figure, RenderedChart, UiEvent, YearRange, YearSliderSpec,
};
use hu_crime_map_dataset::Dataset;

use crate::{charts, filter, selection};

/// Initial slider selection, clamped into the data's year bounds.
pub const DEFAULT_YEAR_RANGE: YearRange = YearRange {
    start: 2015,
    end: 2024,
};

/// Years divisible by this get a slider tick, as do the bounds.
const MARK_INTERVAL: i32 = 3;

/// Which charts each control redraws.
pub const DISPATCH_TABLE: &[(Control, &[ChartTarget])] = &[
    (
        Control::YearSlider,
        &[
            ChartTarget::ChoroplethMap,
            ChartTarget::TrendChart,
            ChartTarget::DetailedTypeTrendChart,
        ],
    ),
    (
        Control::CountyPicker,
        &[ChartTarget::TrendChart, ChartTarget::DetailedTypeTrendChart],
    ),
    (
        Control::Map,
        &[ChartTarget::TrendChart, ChartTarget::DetailedTypeTrendChart],
    ),
];

/// Charts redrawn when `control` changes.
#[must_use]
pub fn targets_for(control: Control) -> &'static [ChartTarget] {
    DISPATCH_TABLE
        .iter()
        .find(|(c, _)| *c == control)
        .map_or(&[], |(_, targets)| targets)
}

/// Read-only view over a loaded dataset that renders dashboard charts.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
}

impl<'a> Dashboard<'a> {
    /// Wraps a loaded dataset.
    #[must_use]
    pub const fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Initial configuration of the slider and picker.
    #[must_use]
    pub fn controls(&self) -> ControlsSpec {
        let (min, max) = self
            .dataset
            .year_bounds()
            .unwrap_or((DEFAULT_YEAR_RANGE.start, DEFAULT_YEAR_RANGE.end));

        let start = DEFAULT_YEAR_RANGE.start.max(min);
        let end = DEFAULT_YEAR_RANGE.end.min(max);
        let value = if start <= end {
            YearRange::new(start, end)
        } else {
            YearRange::new(min, max)
        };

        let marks: Vec<i32> = self
            .dataset
            .joined()
            .rows()
            .iter()
            .map(|r| r.year)
            .filter(|y| y % MARK_INTERVAL == 0 || *y == min || *y == max)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        ControlsSpec {
            year_slider: YearSliderSpec {
                min,
                max,
                step: 1,
                value,
                marks,
            },
            county_picker: CountyPickerSpec {
                options: self.dataset.counties().to_vec(),
                value: vec![CAPITAL_COUNTY.to_string()],
            },
        }
    }

    /// State matching [`controls`](Self::controls) defaults.
    #[must_use]
    pub fn initial_state(&self) -> DashboardState {
        let controls = self.controls();
        DashboardState {
            year_range: controls.year_slider.value,
            selected_counties: controls.county_picker.value,
        }
    }

    /// Applies `event` to `state` and redraws the affected charts.
    #[must_use]
    pub fn dispatch(&self, state: DashboardState, event: UiEvent) -> DispatchResponse {
        let control = event.control();
        let mut state = DashboardState {
            year_range: state.year_range.normalized(),
            selected_counties: state.selected_counties,
        };

        match event {
            UiEvent::YearRangeChanged { start, end } => {
                state.year_range = YearRange::new(start, end);
            }
            UiEvent::CountiesChanged { counties } => {
                selection::apply_picker_change(&mut state.selected_counties, counties);
            }
            UiEvent::MapClicked { county } => {
                selection::apply_map_click(&mut state.selected_counties, county.as_deref());
            }
        }

        let charts = targets_for(control)
            .iter()
            .map(|target| RenderedChart {
                target: *target,
                figure: self.render(*target, &state),
            })
            .collect();

        log::debug!("Dispatched {control} event, new state {state:?}");

        DispatchResponse { state, charts }
    }

    /// Renders every chart for `state`.
    #[must_use]
    pub fn render_all(&self, state: &DashboardState) -> Vec<RenderedChart> {
        ChartTarget::ALL
            .iter()
            .map(|target| RenderedChart {
                target: *target,
                figure: self.render(*target, state),
            })
            .collect()
    }

    /// Renders one chart for `state`.
    #[must_use]
    pub fn render(&self, target: ChartTarget, state: &DashboardState) -> Figure {
        let range = state.year_range.normalized();
        match target {
            ChartTarget::ChoroplethMap => charts::render_map(
                &filter::map_view(self.dataset, range),
                range,
                self.dataset.safety_index_domain(),
            ),
            ChartTarget::TrendChart => charts::render_trend(
                &filter::trend_view(self.dataset, &state.selected_counties),
                &filter::effective_selection(&state.selected_counties),
                range,
            ),
            ChartTarget::DetailedTypeTrendChart => charts::render_detailed(
                &filter::detailed_view(self.dataset, &state.selected_counties),
                range,
            ),
        }
    }
}
