//! Metrics handlers
//!
//! Every metrics route dispatches through the mode descriptor table; the
//! per-mode paths and the generic `/api/metrics` forms share one assembly
//! path.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::models::{MetricRow, MetricsResponse};
use crate::{db, modes, synthetic, AppError, AppResult, AppState};

/// `/api/mode{N}/metrics`
pub async fn for_mode(
    State(state): State<AppState>,
    Path(mode_tag): Path<String>,
) -> AppResult<Response> {
    let mode = parse_mode_tag(&mode_tag)?;
    mode_payload(&state, mode, None).await
}

/// `/api/mode{N}/metrics/{unit}`
pub async fn for_mode_and_unit(
    State(state): State<AppState>,
    Path((mode_tag, unit)): Path<(String, String)>,
) -> AppResult<Response> {
    let mode = parse_mode_tag(&mode_tag)?;
    mode_payload(&state, mode, Some(unit)).await
}

/// `/api/metrics/{mode}`
pub async fn by_number(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> AppResult<Response> {
    let mode: i64 = mode
        .parse()
        .map_err(|_| AppError::InvalidMode(mode.clone()))?;
    mode_payload(&state, mode, None).await
}

/// `/api/metrics?mode=<mode>`
pub async fn by_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    let raw = params
        .get("mode")
        .ok_or_else(|| AppError::InvalidMode("<missing>".to_string()))?;
    let mode: i64 = raw.parse().map_err(|_| AppError::InvalidMode(raw.clone()))?;
    mode_payload(&state, mode, None).await
}

/// Mode path segments look like `mode1` .. `mode4`
fn parse_mode_tag(tag: &str) -> Result<i64, AppError> {
    tag.strip_prefix("mode")
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| AppError::InvalidMode(tag.to_string()))
}

/// Shared assembly: resolve the data source, then shape the response
async fn mode_payload(state: &AppState, mode: i64, unit: Option<String>) -> AppResult<Response> {
    if let Some(unit) = unit.as_deref() {
        if !synthetic::is_valid_unit(unit) {
            return Err(AppError::InvalidBusinessUnit(unit.to_string()));
        }
    }

    // Unknown modes answer with an empty KPI list, not an error
    let Some(desc) = modes::descriptor(mode) else {
        return Ok(Json(json!({ "kpis": [] })).into_response());
    };

    let store_rows = if desc.store_backed {
        fetch_store_rows(state, mode).await
    } else {
        None
    };

    let from_store = store_rows.is_some();
    let kpis = modes::assemble_kpis(desc, unit.as_deref(), store_rows.as_ref());

    let message = if from_store {
        "KPIs retrieved successfully".to_string()
    } else {
        format!("Using mock mode{mode} data")
    };

    Ok(Json(MetricsResponse {
        kpis,
        status: "success".to_string(),
        message,
        hyperparameters: hyperparameters_for(mode),
    })
    .into_response())
}

/// Stored overrides for one mode; any failure or an empty result set means
/// the synthetic defaults are used instead.
async fn fetch_store_rows(state: &AppState, mode: i64) -> Option<HashMap<String, String>> {
    let mut conn = db::connect_store(&state.config).await?;
    match MetricRow::fetch_for_mode(&mut conn, mode).await {
        Ok(rows) if !rows.is_empty() => {
            Some(rows.into_iter().map(|r| (r.row_key, r.value)).collect())
        }
        Ok(_) => {
            tracing::warn!("No stored metrics for mode {mode}, using synthetic values");
            None
        }
        Err(err) => {
            tracing::warn!("Metrics query failed for mode {mode}, using synthetic values: {err}");
            None
        }
    }
}

fn hyperparameters_for(mode: i64) -> Option<Value> {
    match mode {
        1 => Some(synthetic::mode1_hyperparameters()),
        2 => Some(synthetic::mode2_hyperparameters()),
        _ => None,
    }
}
