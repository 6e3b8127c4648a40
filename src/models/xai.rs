//! XAI explanation model

use serde::Serialize;
use sqlx::PgConnection;

/// Explanation response for the XAI endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XaiResponse {
    pub id: String,
    pub text: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_score: Option<f64>,
}

/// Fetch the stored explanation text for one mode, if any
pub async fn fetch_explanation(
    conn: &mut PgConnection,
    mode: i32,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT explanation FROM xai_results WHERE mode = $1 LIMIT 1")
        .bind(mode)
        .fetch_optional(conn)
        .await
}
