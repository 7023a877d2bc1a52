//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness response. The service holds no connections of its own, so
/// there are no per-component checks to report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
