//! Business unit listing handler

use axum::{extract::State, Json};

use crate::models::{business_unit, BusinessUnitsResponse};
use crate::{db, synthetic, AppResult, AppState};

/// List business units, from the store when it is reachable
pub async fn list(State(state): State<AppState>) -> AppResult<Json<BusinessUnitsResponse>> {
    if let Some(mut conn) = db::connect_store(&state.config).await {
        match business_unit::fetch_names(&mut conn).await {
            Ok(units) if !units.is_empty() => {
                return Ok(Json(BusinessUnitsResponse {
                    units,
                    status: "success".to_string(),
                    message: "Business units retrieved successfully".to_string(),
                    hyperparameters: synthetic::business_units_hyperparameters(),
                }));
            }
            Ok(_) => tracing::warn!("Business units table is empty, serving mock data"),
            Err(err) => tracing::warn!("Business units query failed, serving mock data: {err}"),
        }
    }

    Ok(Json(BusinessUnitsResponse {
        units: synthetic::MOCK_UNITS.iter().map(|u| u.to_string()).collect(),
        status: "success".to_string(),
        message: "Using mock business units data".to_string(),
        hyperparameters: synthetic::business_units_hyperparameters(),
    }))
}
