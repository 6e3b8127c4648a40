//! Error/drift table handler

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{
    MockErrorsResponse, StoredError, StoredErrorPoint, StoredErrorTableRow, StoredErrorsResponse,
};
use crate::{db, synthetic, AppResult, AppState};

/// `/api/errors`: per-period error records for plot and table
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    if let Some(mut conn) = db::connect_store(&state.config).await {
        match StoredError::fetch_all(&mut conn).await {
            Ok(rows) if !rows.is_empty() => return Ok(shape_stored(rows).into_response()),
            Ok(_) => tracing::warn!("Errors table is empty, serving synthetic series"),
            Err(err) => tracing::warn!("Errors query failed, serving synthetic series: {err}"),
        }
    }

    let (plot_data, table_data) = synthetic::error_series();
    Ok(Json(MockErrorsResponse {
        plot_data,
        table_data,
        hyperparameters: synthetic::errors_hyperparameters(),
    })
    .into_response())
}

fn shape_stored(rows: Vec<StoredError>) -> Json<StoredErrorsResponse> {
    let plot_data = rows
        .iter()
        .map(|row| StoredErrorPoint {
            time_period: row.time_period.clone(),
            mean_prediction: row.mean_prediction,
            error: row.error,
            exceeds_threshold: row.exceeds_threshold,
        })
        .collect();

    let table_data = rows
        .into_iter()
        .map(|row| StoredErrorTableRow {
            id: synthetic::tagged_id("ERR"),
            percentage_error: synthetic::percentage_error(row.error, row.mean_prediction),
            time_period: row.time_period,
            mean_prediction: row.mean_prediction,
            error: row.error,
            exceeds_threshold: row.exceeds_threshold,
        })
        .collect();

    Json(StoredErrorsResponse {
        plot_data,
        table_data,
        hyperparameters: synthetic::errors_hyperparameters(),
    })
}
