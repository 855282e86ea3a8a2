//! Case counts per crime type and county in one chart.
//!
//! Colour encodes the crime type, dash pattern and marker symbol encode
//! the county.

use hu_crime_map_dashboard_models::figure::{
    Layout, Legend, Line, Marker, ScatterTrace, Title, Trace,
};
use hu_crime_map_dashboard_models::{Figure, YearRange};

use super::{DASHES, PALETTE, SYMBOLS, X_AXIS_TITLE, Y_AXIS_TITLE, axis, year_band};
use crate::filter::DetailedView;

const LEGEND_TITLE: &str = "Jelmagyarázat (Szín=Típus, Vonal=Megye)";
const HEIGHT: u32 = 600;

/// Renders one series per (crime type, county) pair.
#[must_use]
pub fn render_detailed(view: &DetailedView<'_>, range: YearRange) -> Figure {
    let mut crime_types: Vec<&str> = Vec::new();
    for row in &view.rows {
        if !crime_types.contains(&row.crime_type.as_str()) {
            crime_types.push(&row.crime_type);
        }
    }

    let mut data = Vec::new();
    for (type_idx, crime_type) in crime_types.iter().enumerate() {
        let color = PALETTE[type_idx % PALETTE.len()];
        for (county_idx, county) in view.counties.iter().enumerate() {
            let series: Vec<_> = view
                .rows
                .iter()
                .filter(|r| r.crime_type == *crime_type && &r.county == county)
                .collect();
            if series.is_empty() {
                continue;
            }
            data.push(Trace::Scatter(ScatterTrace {
                name: format!("{crime_type}, {county}"),
                mode: "lines+markers".to_string(),
                x: series.iter().map(|r| r.year).collect(),
                y: series.iter().map(|r| r.case_count).collect(),
                line: Line {
                    dash: Some(DASHES[county_idx % DASHES.len()].to_string()),
                    color: Some(color.to_string()),
                },
                marker: Marker {
                    symbol: Some(SYMBOLS[county_idx % SYMBOLS.len()].to_string()),
                    color: Some(color.to_string()),
                },
                legendgroup: Some((*crime_type).to_string()),
            }));
        }
    }

    Figure {
        data,
        layout: Layout {
            title: Some(Title::new(format!(
                "Bűncselekmény Típusok és Megyék Összehasonlítása ({})",
                view.counties.join(", ")
            ))),
            shapes: vec![year_band(range)],
            xaxis: axis(X_AXIS_TITLE),
            yaxis: axis(Y_AXIS_TITLE),
            hovermode: Some("x unified".to_string()),
            legend: Some(Legend {
                title: Title::new(LEGEND_TITLE),
            }),
            height: Some(HEIGHT),
            ..Layout::default()
        },
    }
}
