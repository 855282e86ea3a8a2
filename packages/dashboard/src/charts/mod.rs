//! Chart renderers.
//!
//! Each renderer is a pure function from filtered rows to a [`Figure`].
//! Empty input yields a figure with no traces, which the page draws as a
//! blank chart.
//!
//! [`Figure`]: hu_crime_map_dashboard_models::Figure

pub mod detailed;
pub mod map;
pub mod trend;

use hu_crime_map_dashboard_models::YearRange;
use hu_crime_map_dashboard_models::figure::{Axis, Shape, ShapeLine, Title};

pub use detailed::render_detailed;
pub use map::render_map;
pub use trend::render_trend;

/// Qualitative colour cycle for crime types.
pub const PALETTE: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Dash patterns, one per county in the detailed view.
pub const DASHES: &[&str] = &["solid", "dot", "dash", "longdash", "dashdot"];

/// Marker symbols, one per county in the detailed view.
pub const SYMBOLS: &[&str] = &["circle", "diamond", "square", "x", "cross"];

const X_AXIS_TITLE: &str = "Év";
const Y_AXIS_TITLE: &str = "Esetek száma";

/// Shaded vertical band marking the selected years.
#[must_use]
pub fn year_band(range: YearRange) -> Shape {
    Shape {
        kind: "rect".to_string(),
        xref: "x".to_string(),
        yref: "paper".to_string(),
        x0: f64::from(range.start),
        x1: f64::from(range.end),
        y0: 0.0,
        y1: 1.0,
        fillcolor: "LightSalmon".to_string(),
        opacity: 0.3,
        layer: "below".to_string(),
        line: ShapeLine { width: 0.0 },
    }
}

fn axis(title: &str) -> Option<Axis> {
    Some(Axis {
        title: Title::new(title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_spans_selected_years() {
        let band = year_band(YearRange::new(2018, 2020));
        assert!((band.x0 - 2018.0).abs() < f64::EPSILON);
        assert!((band.x1 - 2020.0).abs() < f64::EPSILON);
        assert_eq!(band.yref, "paper");
        assert_eq!(band.layer, "below");
    }

    #[test]
    fn styles_cover_the_detailed_cap() {
        assert!(DASHES.len() >= crate::filter::MAX_DETAILED_COUNTIES);
        assert!(SYMBOLS.len() >= crate::filter::MAX_DETAILED_COUNTIES);
    }
}
