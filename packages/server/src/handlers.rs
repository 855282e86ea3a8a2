//! HTTP handler functions for the dashboard page and API.

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    web,
};
use hu_crime_map_dashboard::Dashboard;
use hu_crime_map_dashboard_models::DispatchRequest;
use hu_crime_map_server_models::{ApiFigures, ApiHealth, FiguresQueryParams};

use crate::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `GET /`
///
/// Serves the single-page dashboard.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let dataset = &state.dataset;
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        joined_rows: dataset.joined().rows().len(),
        regions: dataset.joined().regions().len(),
        crime_type_rows: dataset.crime_type_records().len(),
        category_rows: dataset.category_table().len(),
    })
}

/// `GET /api/controls`
///
/// Returns the initial slider and picker configuration.
pub async fn controls(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(Dashboard::new(&state.dataset).controls())
}

/// `GET /api/figures`
///
/// Renders every chart for the state described by the query string.
pub async fn figures(
    state: web::Data<AppState>,
    params: web::Query<FiguresQueryParams>,
) -> HttpResponse {
    let dashboard = Dashboard::new(&state.dataset);
    let dashboard_state = params.into_inner().into_state(dashboard.initial_state());
    let charts = dashboard.render_all(&dashboard_state);

    HttpResponse::Ok().json(ApiFigures {
        state: dashboard_state,
        charts,
    })
}

/// `POST /api/dispatch`
///
/// Applies one UI event and returns the new state plus the charts the
/// event's control feeds.
pub async fn dispatch(
    state: web::Data<AppState>,
    body: web::Json<DispatchRequest>,
) -> HttpResponse {
    let DispatchRequest {
        state: dashboard_state,
        event,
    } = body.into_inner();

    log::debug!("Dispatching {event:?}");

    HttpResponse::Ok().json(Dashboard::new(&state.dataset).dispatch(dashboard_state, event))
}

/// Rejects an unparseable JSON body with a JSON error message.
#[allow(clippy::needless_pass_by_value)]
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}

/// Rejects an unparseable query string with a JSON error message.
#[allow(clippy::needless_pass_by_value)]
pub fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}

fn bad_request<E: std::fmt::Debug + std::fmt::Display + 'static>(err: E) -> actix_web::Error {
    log::debug!("Rejected request: {err}");
    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "error": err.to_string()
    }));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use geo::{MultiPolygon, polygon};
    use hu_crime_map_crime_models::{CategoryTable, CrimeRecord, CrimeTypeRecord};
    use hu_crime_map_dashboard_models::{
        ChartTarget, ControlsSpec, DashboardState, DispatchResponse, UiEvent, YearRange,
    };
    use hu_crime_map_dataset::Dataset;
    use hu_crime_map_geography_models::GeographicRegion;
    use serde_json::json;

    use super::*;
    use crate::configure;

    fn region(name: &str, x: f64) -> GeographicRegion {
        GeographicRegion {
            name: name.to_string(),
            boundary: MultiPolygon(vec![polygon![
                (x: x, y: 0.0),
                (x: x + 1.0, y: 0.0),
                (x: x + 1.0, y: 1.0),
                (x: x, y: 1.0),
            ]]),
        }
    }

    fn type_row(county: &str, year: i32, crime_type: &str, case_count: f64) -> CrimeTypeRecord {
        CrimeTypeRecord {
            county: county.to_string(),
            year,
            crime_type: crime_type.to_string(),
            case_count,
        }
    }

    fn app_state() -> web::Data<AppState> {
        let records = vec![
            CrimeRecord::new("Pest".to_string(), 2019, 900.0, 90_000.0),
            CrimeRecord::new("Pest".to_string(), 2020, 1000.0, 100_000.0),
            CrimeRecord::new("Pest".to_string(), 2021, 1100.0, 100_000.0),
            CrimeRecord::new("Baranya".to_string(), 2020, 300.0, 60_000.0),
            CrimeRecord::new("Budapest".to_string(), 2020, 5000.0, 1_700_000.0),
        ];
        let types = vec![
            type_row("Budapest", 2020, "Lopás", 2000.0),
            type_row("Budapest", 2020, "Összesen", 5000.0),
            type_row("Pest", 2020, "Lopás", 400.0),
        ];
        let categories = CategoryTable {
            headers: vec!["Kategória".to_string()],
            rows: vec![vec!["Vagyon elleni".to_string()]],
        };
        let dataset = Dataset::from_parts(
            vec![region("Pest", 0.0), region("Baranya", 2.0)],
            records,
            types,
            categories,
        );
        web::Data::new(AppState {
            dataset: Arc::new(dataset),
        })
    }

    fn state(counties: &[&str]) -> DashboardState {
        DashboardState {
            year_range: YearRange::new(2019, 2021),
            selected_counties: counties.iter().map(ToString::to_string).collect(),
        }
    }

    #[actix_web::test]
    async fn serves_index_page() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("/api/dispatch"));
        assert!(
            html.contains("(year - min) / (max - min)"),
            "year ticks should be placed by year"
        );
    }

    #[actix_web::test]
    async fn health_reports_table_sizes() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["healthy"], true);
        assert_eq!(body["joinedRows"], 4);
        assert_eq!(body["regions"], 2);
        assert_eq!(body["crimeTypeRows"], 3);
        assert_eq!(body["categoryRows"], 1);
    }

    #[actix_web::test]
    async fn controls_clamp_default_range_to_data() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/controls").to_request();
        let controls: ControlsSpec = test::call_and_read_body_json(&app, req).await;

        assert_eq!(controls.year_slider.value, YearRange::new(2019, 2021));
        assert_eq!(
            controls.county_picker.options,
            vec![
                "Baranya".to_string(),
                "Budapest".to_string(),
                "Pest".to_string()
            ]
        );
        assert_eq!(controls.county_picker.value, vec!["Budapest".to_string()]);
    }

    #[actix_web::test]
    async fn figures_render_all_charts() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/figures?from=2021&to=2019&counties=Pest")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["state"]["yearRange"], json!({ "start": 2019, "end": 2021 }));
        let targets: Vec<&str> = body["charts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["target"].as_str().unwrap())
            .collect();
        assert_eq!(
            targets,
            vec!["choropleth-map", "trend-chart", "detailed-type-trend-chart"]
        );
        assert_eq!(body["charts"][0]["figure"]["data"][0]["type"], "choropleth");
    }

    #[actix_web::test]
    async fn dispatch_map_click_appends_county() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let request = DispatchRequest {
            state: state(&["Budapest"]),
            event: UiEvent::MapClicked {
                county: Some("Pest".to_string()),
            },
        };
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(&request)
            .to_request();
        let response: DispatchResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            response.state.selected_counties,
            vec!["Budapest".to_string(), "Pest".to_string()]
        );
        let targets: Vec<ChartTarget> = response.charts.iter().map(|c| c.target).collect();
        assert_eq!(
            targets,
            vec![ChartTarget::TrendChart, ChartTarget::DetailedTypeTrendChart]
        );
    }

    #[actix_web::test]
    async fn dispatch_accepts_wire_format() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({
                "state": {
                    "yearRange": { "start": 2019, "end": 2021 },
                    "selectedCounties": ["Pest"],
                },
                "event": { "type": "yearRangeChanged", "start": 2020, "end": 2020 },
            }))
            .to_request();
        let response: DispatchResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(response.state.year_range, YearRange::new(2020, 2020));
        assert_eq!(response.charts.len(), 3);
    }

    #[actix_web::test]
    async fn dispatch_rejects_malformed_body() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({ "event": { "type": "explode" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn figures_reject_non_numeric_year() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/figures?from=soon")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
