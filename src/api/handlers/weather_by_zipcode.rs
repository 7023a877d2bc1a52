//! Handler for the path-bound weather lookup endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::error::LookupError;
use crate::domain::temperature::TemperatureMap;
use crate::error::AppError;
use crate::state::AppState;

/// Looks up normalized temperatures for a postal code taken from the path.
///
/// # Endpoint
///
/// `GET /weather/{zipcode}`
///
/// # Response Codes
///
/// - **200 OK**: `{"temp_C", "temp_F", "temp_K"}` with Kelvin derived from
///   Celsius
/// - **404 Not Found**: no upstream could resolve the postal code
/// - **500 Internal Server Error**: every other failure, including a badly
///   formatted postal code
pub async fn weather_by_zipcode_handler(
    State(state): State<AppState>,
    Path(zipcode): Path<String>,
) -> Result<Json<TemperatureMap>, AppError> {
    let temperatures = state
        .city_weather
        .lookup(&zipcode)
        .await
        .map_err(map_lookup_error)?;

    Ok(Json(temperatures))
}

/// Boundary status policy for this endpoint: only an unresolvable postal
/// code gets a distinct status.
fn map_lookup_error(err: LookupError) -> AppError {
    if err.is_not_found() {
        AppError::not_found(err.to_string())
    } else {
        AppError::internal(err.to_string())
    }
}
