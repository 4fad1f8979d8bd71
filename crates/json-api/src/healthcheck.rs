//! Inventory JSON API Healthcheck Handler

use salvo::prelude::*;
use serde::Serialize;

/// Healthcheck response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Reports liveness only; the database is not checked.
#[handler]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
