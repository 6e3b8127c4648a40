//! Business unit model

use serde::Serialize;
use sqlx::PgConnection;

/// Unit listing response
#[derive(Debug, Serialize)]
pub struct BusinessUnitsResponse {
    pub units: Vec<String>,
    pub status: String,
    pub message: String,
    pub hyperparameters: String,
}

/// Fetch the stored unit names
pub async fn fetch_names(conn: &mut PgConnection) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT name FROM business_units ORDER BY name")
        .fetch_all(conn)
        .await
}
