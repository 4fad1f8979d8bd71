//! API Errors

use salvo::{FlowCtrl, Response, catcher::Catcher, handler, http::StatusCode, writing::Scribe};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::respond_json;

/// Error payload written for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    /// Human-readable description of the failure
    pub error: String,
}

/// Failures that end a request.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("invalid product id: {0:?}")]
    InvalidId(String),

    #[error("invalid request payload: {0}")]
    InvalidBody(String),

    #[error("product not found")]
    NotFound,

    /// Details are logged where the failure happens, never sent to the client.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        let status = self.status_code();

        respond_json(
            res,
            status,
            ErrorResponse {
                error: self.to_string(),
            },
        );
    }
}

/// Router misses, whether the path is unknown or the method is not
/// registered for it, answer with the JSON not-found error.
#[handler]
async fn route_not_found(res: &mut Response, ctrl: &mut FlowCtrl) {
    let unrouted = matches!(
        res.status_code,
        Some(StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED)
    );

    if unrouted && res.body.is_none() {
        res.render(ApiError::NotFound);
        ctrl.skip_rest();
    }
}

/// Catcher installed on every service.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(route_not_found)
}
