//! Handler for the CEP-keyed weather lookup endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use tracing::Instrument;

use crate::api::dto::weather::CepLookupRequest;
use crate::domain::error::LookupError;
use crate::domain::postal_code::PostalCodeInput;
use crate::domain::temperature::WeatherReading;
use crate::domain::trace::TraceContext;
use crate::error::AppError;
use crate::state::AppState;

/// Looks up the current temperature triple for a postal code.
///
/// # Endpoint
///
/// `POST /weather` with body `{"cep": <any JSON value>}`
///
/// # Request Flow
///
/// 1. Decode the body; a malformed body is a 400
/// 2. Extract the caller's trace context from the inbound headers
/// 3. Run the lookup inside a span named by configuration, forwarding the
///    trace context to the upstream hop
///
/// # Response Codes
///
/// - **200 OK**: `{"temp_c", "temp_f", "temp_k"}` as reported upstream
/// - **400 Bad Request**: malformed body, or an upstream failure that is
///   neither "not found" nor the caller's fault
/// - **404 Not Found**: the upstream does not know the postal code
/// - **422 Unprocessable Entity**: `cep` is not a string of 8 digits
pub async fn weather_by_cep_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CepLookupRequest>, JsonRejection>,
) -> Result<Json<WeatherReading>, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::bad_request("Invalid request body"))?;

    let trace = TraceContext::extract(&headers);
    let span = tracing::info_span!("cep_lookup", request_name = %state.request_name);

    let reading = state
        .cep_weather
        .lookup(PostalCodeInput::from(payload.cep), &trace)
        .instrument(span)
        .await
        .map_err(map_lookup_error)?;

    Ok(Json(reading))
}

/// Boundary status policy for this endpoint: input-layer failures are the
/// caller's fault (422), an unresolvable code is 404, and every other
/// upstream-layer failure is 400.
fn map_lookup_error(err: LookupError) -> AppError {
    if err.is_client_input() {
        AppError::unprocessable(err.to_string())
    } else if err.is_not_found() {
        AppError::not_found(err.to_string())
    } else {
        AppError::bad_request(err.to_string())
    }
}
