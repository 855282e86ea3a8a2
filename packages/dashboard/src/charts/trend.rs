//! Registered crime count over the full history of each selected county.

use hu_crime_map_crime_models::CrimeRecord;
use hu_crime_map_dashboard_models::figure::{Layout, Line, Marker, ScatterTrace, Title, Trace};
use hu_crime_map_dashboard_models::{Figure, YearRange};

use super::{X_AXIS_TITLE, Y_AXIS_TITLE, axis, year_band};

/// Renders one line per county, in `counties` order, with the selected
/// years shaded rather than cropped.
///
/// `rows` must already be sorted by year. Counties without rows get no
/// line.
#[must_use]
pub fn render_trend(rows: &[&CrimeRecord], counties: &[String], range: YearRange) -> Figure {
    let data = counties
        .iter()
        .filter_map(|county| {
            let series: Vec<&&CrimeRecord> = rows.iter().filter(|r| &r.county == county).collect();
            if series.is_empty() {
                return None;
            }
            Some(Trace::Scatter(ScatterTrace {
                name: county.clone(),
                mode: "lines+markers".to_string(),
                x: series.iter().map(|r| r.year).collect(),
                y: series.iter().map(|r| r.registered_crime_count).collect(),
                line: Line::default(),
                marker: Marker::default(),
                legendgroup: None,
            }))
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Some(Title::new("Összesített bűnözés alakulása")),
            shapes: vec![year_band(range)],
            xaxis: axis(X_AXIS_TITLE),
            yaxis: axis(Y_AXIS_TITLE),
            hovermode: Some("x unified".to_string()),
            ..Layout::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{effective_selection, tests::sample_dataset, trend_view};

    fn scatter(trace: &Trace) -> &ScatterTrace {
        match trace {
            Trace::Scatter(s) => s,
            Trace::Choropleth(_) => panic!("expected a scatter trace"),
        }
    }

    #[test]
    fn plots_full_history_with_band() {
        let dataset = sample_dataset();
        let selected = vec!["X".to_string()];
        let range = YearRange::new(2018, 2020);
        let figure = render_trend(
            &trend_view(&dataset, &selected),
            &effective_selection(&selected),
            range,
        );

        assert_eq!(figure.data.len(), 1);
        let line = scatter(&figure.data[0]);
        assert_eq!(line.name, "X");
        assert_eq!(line.x, vec![2016, 2017, 2018, 2019, 2020, 2021]);

        let band = &figure.layout.shapes[0];
        assert!((band.x0 - 2018.0).abs() < f64::EPSILON);
        assert!((band.x1 - 2020.0).abs() < f64::EPSILON);
    }

    #[test]
    fn one_line_per_county_in_selection_order() {
        let dataset = sample_dataset();
        let selected = vec!["X".to_string(), "Budapest".to_string()];
        let figure = render_trend(
            &trend_view(&dataset, &selected),
            &effective_selection(&selected),
            YearRange::new(2015, 2024),
        );
        let names: Vec<&str> = figure
            .data
            .iter()
            .map(|t| scatter(t).name.as_str())
            .collect();
        assert_eq!(names, vec!["X", "Budapest"]);
    }

    #[test]
    fn county_without_data_is_blank() {
        let dataset = sample_dataset();
        let selected = vec!["Nowhere".to_string()];
        let figure = render_trend(
            &trend_view(&dataset, &selected),
            &effective_selection(&selected),
            YearRange::new(2015, 2024),
        );
        assert!(figure.is_blank());
        assert_eq!(figure.layout.shapes.len(), 1);
    }
}
