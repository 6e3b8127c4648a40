//! Root endpoint listing

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    message: &'static str,
    endpoints: &'static [&'static str],
}

/// Public endpoints advertised at the root
const ENDPOINTS: &[&str] = &[
    "/api/businessUnits",
    "/api/mode1/metrics",
    "/api/mode2/metrics",
    "/api/mode2/xai",
    "/api/mode3/metrics",
    "/api/mode4/metrics",
    "/api/metrics?mode=<mode>",
    "/api/errors",
    "/mode1/data",
    "/mode2/data",
    "/mode3/data",
    "/mode4/data",
    "/mode-selection-data",
    "/entries-table",
    "/health",
];

pub async fn root() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Drift monitoring backend",
        endpoints: ENDPOINTS,
    })
}
