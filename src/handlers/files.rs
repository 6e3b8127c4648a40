//! Static JSON dumps and favicon

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{AppError, AppResult, AppState};

/// Dump names accepted on `/{mode}/data`
const MODE_DATA_TAGS: [&str; 4] = ["mode1", "mode2", "mode3", "mode4"];

/// `/mode{N}/data`
pub async fn mode_data(
    State(state): State<AppState>,
    Path(mode_tag): Path<String>,
) -> AppResult<Json<Value>> {
    if !MODE_DATA_TAGS.contains(&mode_tag.as_str()) {
        return Err(AppError::DataFileNotFound(format!("{mode_tag}.json")));
    }
    serve_json_file(&state, &format!("{mode_tag}.json")).await
}

/// `/mode-selection-data`
pub async fn mode_selection_data(State(state): State<AppState>) -> AppResult<Json<Value>> {
    serve_json_file(&state, "mode-selection-data.json").await
}

/// `/entries-table`
pub async fn entries_table(State(state): State<AppState>) -> AppResult<Json<Value>> {
    serve_json_file(&state, "entries-table.json").await
}

/// Read and parse one named JSON file from the data directory.
///
/// A missing file and malformed content are the same 404 to the caller,
/// split only in the log.
async fn serve_json_file(state: &AppState, name: &str) -> AppResult<Json<Value>> {
    let path = state.config.data_dir.join(name);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Data file {} unreadable: {err}", path.display());
            return Err(AppError::DataFileNotFound(name.to_string()));
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Json(value)),
        Err(err) => {
            tracing::warn!("Data file {} is not valid JSON: {err}", path.display());
            Err(AppError::DataFileNotFound(name.to_string()))
        }
    }
}

/// `/favicon.ico`: icon bytes when present, empty 204 otherwise
pub async fn favicon(State(state): State<AppState>) -> AppResult<Response> {
    let path = state.config.data_dir.join("favicon.ico");
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/x-icon")], bytes).into_response()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(err) => Err(AppError::Internal(format!("favicon read failed: {err}"))),
    }
}
