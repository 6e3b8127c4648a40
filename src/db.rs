//! Store access: per-request connections, fallback chain, schema.

use sqlx::{Connection, PgConnection};

use crate::config::Config;
use crate::AppResult;

/// Dial the metadata store for one request.
///
/// Tries the primary connection string, then the configured fallback. Any
/// failure resolves to `None` and the caller switches to synthetic data.
/// In mock mode the store is never dialed. The returned connection lives
/// for the duration of one handler and is dropped on every exit path.
pub async fn connect_store(config: &Config) -> Option<PgConnection> {
    if config.mock_mode {
        return None;
    }

    match PgConnection::connect(&config.database_url).await {
        Ok(conn) => Some(conn),
        Err(err) => {
            tracing::warn!("Primary store connection failed: {err}");
            let fallback = config.fallback_database_url.as_deref()?;
            match PgConnection::connect(fallback).await {
                Ok(conn) => Some(conn),
                Err(err) => {
                    tracing::warn!("Fallback store connection failed: {err}");
                    None
                }
            }
        }
    }
}

/// Apply the store schema at startup.
///
/// Best effort: an unreachable store is not fatal, the server keeps serving
/// synthetic data until the store comes back.
pub async fn prepare_store(config: &Config) -> AppResult<()> {
    let Some(mut conn) = connect_store(config).await else {
        tracing::warn!("Store unreachable at startup, skipping schema application");
        return Ok(());
    };

    sqlx::raw_sql(SCHEMA_SQL).execute(&mut conn).await?;
    tracing::info!("Store schema applied successfully");
    Ok(())
}

/// Store schema SQL
const SCHEMA_SQL: &str = r#"
-- Business units shown in the dashboard's unit picker
CREATE TABLE IF NOT EXISTS business_units (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL UNIQUE
);

-- Named KPI overrides per monitoring mode
CREATE TABLE IF NOT EXISTS mode_metrics (
    id SERIAL PRIMARY KEY,
    mode INT NOT NULL,
    row_key VARCHAR(100) NOT NULL,
    value TEXT NOT NULL
);

-- One error record per time bucket
CREATE TABLE IF NOT EXISTS errors (
    id SERIAL PRIMARY KEY,
    time_period VARCHAR(20) NOT NULL,
    mean_prediction DOUBLE PRECISION NOT NULL,
    error DOUBLE PRECISION NOT NULL,
    exceeds_threshold BOOLEAN NOT NULL
);

-- Canned explainability text per mode
CREATE TABLE IF NOT EXISTS xai_results (
    id SERIAL PRIMARY KEY,
    mode INT NOT NULL,
    explanation TEXT NOT NULL
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_mode_metrics_mode ON mode_metrics(mode);
CREATE INDEX IF NOT EXISTS idx_xai_results_mode ON xai_results(mode);
"#;
