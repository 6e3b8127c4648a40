//! KPI models

use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, PgConnection};

/// A single named metric reading in a `kpis` list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub row_key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
}

/// Metrics endpoint response body
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub kpis: Vec<KpiRow>,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Value>,
}

/// One stored `row_key -> value` override for a mode
#[derive(Debug, Clone, FromRow)]
pub struct MetricRow {
    pub row_key: String,
    pub value: String,
}

impl MetricRow {
    pub async fn fetch_for_mode(
        conn: &mut PgConnection,
        mode: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, MetricRow>("SELECT row_key, value FROM mode_metrics WHERE mode = $1")
            .bind(mode)
            .fetch_all(conn)
            .await
    }
}
