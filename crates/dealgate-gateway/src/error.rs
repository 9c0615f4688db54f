//! HTTP rendering of `DealGateError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use dealgate_core::error::DealGateError;

/// Label reported when the upstream could not be reached at all.
pub const UPSTREAM_UNREACHABLE: &str = "Error occurred when requesting Pipedrive API";

/// Wrapper so core errors can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub DealGateError);

impl From<DealGateError> for ApiError {
    fn from(e: DealGateError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        match self.0 {
            DealGateError::Upstream { status, info, success } => {
                tracing::warn!(status, ?info, "upstream rejected request");
                let http = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let body = Json(json!({
                    "error": DealGateError::upstream_label(status),
                    "info": info,
                    "status": success,
                }));
                (http, body).into_response()
            }
            DealGateError::Transport(message) => {
                tracing::error!(%message, "upstream request failed");
                let body = Json(json!({
                    "error": UPSTREAM_UNREACHABLE,
                    "message": message,
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            e @ DealGateError::MissingDealId => {
                (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response()
            }
            e @ DealGateError::BadRequest(_) => {
                let body = Json(json!({ "error": code.as_str(), "message": e.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            e @ (DealGateError::Config(_) | DealGateError::Internal(_)) => {
                tracing::error!(error = %e, "internal failure");
                let body = Json(json!({ "error": code.as_str(), "message": e.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
