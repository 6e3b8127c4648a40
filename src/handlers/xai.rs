//! Explainability text handler

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use rand::Rng;

use crate::models::{xai, XaiResponse};
use crate::{db, synthetic, AppError, AppResult, AppState};

/// `/api/mode2/xai`
pub async fn explain(State(state): State<AppState>) -> AppResult<Json<XaiResponse>> {
    build(&state, None).await
}

/// `/api/mode2/xai/{unit}`
pub async fn explain_for_unit(
    State(state): State<AppState>,
    Path(unit): Path<String>,
) -> AppResult<Json<XaiResponse>> {
    if !synthetic::is_valid_unit(&unit) {
        return Err(AppError::InvalidBusinessUnit(unit));
    }
    build(&state, Some(unit)).await
}

async fn build(state: &AppState, unit: Option<String>) -> AppResult<Json<XaiResponse>> {
    if let Some(mut conn) = db::connect_store(&state.config).await {
        match xai::fetch_explanation(&mut conn, 2).await {
            Ok(Some(text)) => {
                return Ok(Json(stored_response(text, "success")));
            }
            Ok(None) => {
                return Ok(Json(stored_response(
                    "No XAI data available".to_string(),
                    "error",
                )));
            }
            Err(err) => tracing::warn!("XAI query failed, serving canned explanation: {err}"),
        }
    }

    let mut rng = rand::thread_rng();
    let text = synthetic::choose(&mut rng, synthetic::xai_pool(unit.as_deref())).to_string();
    Ok(Json(XaiResponse {
        id: synthetic::tagged_id("XAI"),
        text,
        status: "success".to_string(),
        timestamp: Some(Utc::now().to_rfc3339()),
        business_unit: Some(unit.unwrap_or_else(|| "All".to_string())),
        drift_score: Some(synthetic::round2(rng.gen_range(0.1..0.5))),
    }))
}

fn stored_response(text: String, status: &str) -> XaiResponse {
    XaiResponse {
        id: synthetic::tagged_id("XAI"),
        text,
        status: status.to_string(),
        timestamp: None,
        business_unit: None,
        drift_score: None,
    }
}
