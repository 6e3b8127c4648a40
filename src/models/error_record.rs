//! Error/drift record models

use serde::Serialize;
use sqlx::{FromRow, PgConnection};

/// Plot point in the synthetic error series
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPoint {
    pub x: String,
    pub y: f64,
    pub exceeds_threshold: bool,
}

/// Table row in the synthetic error series
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorTableRow {
    pub predicted: String,
    pub actual: String,
    pub time_period: String,
    pub mean_prediction: f64,
    pub error: f64,
    pub exceeds_threshold: bool,
    pub percentage_error: f64,
}

/// One stored error record per time bucket
#[derive(Debug, Clone, FromRow)]
pub struct StoredError {
    pub time_period: String,
    pub mean_prediction: f64,
    pub error: f64,
    pub exceeds_threshold: bool,
}

impl StoredError {
    pub async fn fetch_all(conn: &mut PgConnection) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, StoredError>(
            "SELECT time_period, mean_prediction, error, exceeds_threshold FROM errors",
        )
        .fetch_all(conn)
        .await
    }
}

/// Stored plot point, kept in store field names
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredErrorPoint {
    pub time_period: String,
    pub mean_prediction: f64,
    pub error: f64,
    pub exceeds_threshold: bool,
}

/// Stored table row, enriched with an id and the percentage error
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredErrorTableRow {
    pub id: String,
    pub time_period: String,
    pub mean_prediction: f64,
    pub error: f64,
    pub percentage_error: f64,
    pub exceeds_threshold: bool,
}

/// Errors endpoint response, synthetic shape
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockErrorsResponse {
    pub plot_data: Vec<ErrorPoint>,
    pub table_data: Vec<ErrorTableRow>,
    pub hyperparameters: String,
}

/// Errors endpoint response, store-backed shape
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredErrorsResponse {
    pub plot_data: Vec<StoredErrorPoint>,
    pub table_data: Vec<StoredErrorTableRow>,
    pub hyperparameters: String,
}
