//! Choropleth of the mean safety index per county.

use geojson::{Feature, FeatureCollection, JsonObject};
use hu_crime_map_dashboard_models::figure::{
    ChoroplethTrace, ColorBar, GeoLayout, Layout, Margin, Projection, Title, Trace,
};
use hu_crime_map_dashboard_models::{Figure, YearRange};

use crate::filter::CountyAverage;

/// Feature property the trace locations are matched against.
const FEATURE_ID_KEY: &str = "properties.name";

/// Renders the map.
///
/// `domain` is the colour range of the whole dataset, so a colour means
/// the same thing whatever years are selected.
#[must_use]
pub fn render_map(
    averages: &[CountyAverage<'_>],
    range: YearRange,
    domain: Option<(f64, f64)>,
) -> Figure {
    let layout = Layout {
        title: Some(Title::new(format!(
            "Átlagos Biztonsági Index ({} - {})",
            range.start, range.end
        ))),
        geo: Some(GeoLayout {
            fitbounds: "locations".to_string(),
            visible: false,
            projection: Projection {
                kind: "mercator".to_string(),
            },
        }),
        margin: Some(Margin {
            r: 0,
            t: 40,
            l: 0,
            b: 0,
        }),
        dragmode: Some("pan".to_string()),
        ..Layout::default()
    };

    if averages.is_empty() {
        return Figure {
            data: vec![],
            layout,
        };
    }

    let trace = ChoroplethTrace {
        geojson: regions_geojson(averages),
        featureidkey: FEATURE_ID_KEY.to_string(),
        locations: averages.iter().map(|a| a.county.to_string()).collect(),
        z: averages.iter().map(|a| a.mean_safety_index).collect(),
        zmin: domain.map(|(lo, _)| lo),
        zmax: domain.map(|(_, hi)| hi),
        colorscale: "Reds".to_string(),
        hovertext: averages.iter().map(hover_text).collect(),
        hovertemplate: "%{hovertext}<extra></extra>".to_string(),
        colorbar: ColorBar {
            title: Title::new("Biztonsági index"),
        },
    };

    Figure {
        data: vec![Trace::Choropleth(trace)],
        layout,
    }
}

/// Hover content: integer counts and a two-decimal index.
#[must_use]
pub fn hover_text(average: &CountyAverage<'_>) -> String {
    let index = average
        .mean_safety_index
        .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
    format!(
        "<b>{}</b><br>Regisztrált bűncselekmények: {:.0}<br>Népesség: {:.0}<br>Biztonsági index: {index}",
        average.county, average.mean_crime_count, average.mean_population
    )
}

fn regions_geojson(averages: &[CountyAverage<'_>]) -> serde_json::Value {
    let features = averages
        .iter()
        .map(|average| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), average.county.into());
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(
                    &average.region.boundary,
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    serde_json::to_value(&collection).unwrap_or_else(|e| {
        log::error!("Failed to serialize map regions: {e}");
        serde_json::Value::Null
    })
}
