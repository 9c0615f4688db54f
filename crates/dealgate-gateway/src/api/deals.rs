//! `/deals` proxy handlers.
//!
//! Each handler forwards to the upstream CRM through [`DealsApi`], times the
//! upstream call, and tags the response with [`UpstreamLatency`] so the
//! metrics middleware can fold it into the request's single record.
//!
//! [`DealsApi`]: crate::upstream::DealsApi

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use dealgate_core::error::{DealGateError, Result};
use dealgate_core::protocol::pipedrive::DealList;

use crate::app_state::AppState;
use crate::error::ApiError;

pub const NO_DEALS_FOUND: &str = "No deals were found";

/// Time spent in the upstream call, attached as a response extension.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamLatency(pub Duration);

fn tag(mut resp: Response, latency: Duration) -> Response {
    resp.extensions_mut().insert(UpstreamLatency(latency));
    resp
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(ct) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Non-JSON or empty bodies are forwarded as `{}`; a JSON body must parse.
fn parse_body(headers: &HeaderMap, raw: &[u8]) -> Result<Value> {
    if !is_json(headers) || raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(raw)
        .map_err(|e| DealGateError::BadRequest(format!("invalid JSON body: {e}")))
}

/// GET /deals
pub async fn list_deals(
    State(app): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    tracing::debug!(?params, "list deals");

    let started = Instant::now();
    let result = app.deals().list(&params).await;
    let latency = started.elapsed();

    let resp = match result {
        Ok(body) => match DealList::from_body(body) {
            DealList::Found(data) => {
                tracing::info!("deals retrieved");
                Json(data).into_response()
            }
            DealList::Empty => {
                tracing::info!("no deals found");
                Json(NO_DEALS_FOUND).into_response()
            }
        },
        Err(e) => ApiError(e).into_response(),
    };
    tag(resp, latency)
}

/// POST /deals
pub async fn create_deal(
    State(app): State<AppState>,
    headers: HeaderMap,
    raw: Bytes,
) -> Response {
    let body = match parse_body(&headers, &raw) {
        Ok(b) => b,
        Err(e) => return ApiError(e).into_response(),
    };

    let started = Instant::now();
    let result = app.deals().create(&body).await;
    let latency = started.elapsed();

    let resp = match result {
        Ok(created) => {
            tracing::info!("deal created");
            Json(created).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    };
    tag(resp, latency)
}

/// PUT /deals?id=N
pub async fn update_deal(
    State(app): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    raw: Bytes,
) -> Response {
    let id = match params.get("id").filter(|id| !id.is_empty()) {
        Some(id) => id.clone(),
        None => return ApiError(DealGateError::MissingDealId).into_response(),
    };
    let body = match parse_body(&headers, &raw) {
        Ok(b) => b,
        Err(e) => return ApiError(e).into_response(),
    };

    let started = Instant::now();
    let result = app.deals().update(&id, &body).await;
    let latency = started.elapsed();

    let resp = match result {
        Ok(updated) => {
            tracing::info!(%id, "deal updated");
            Json(updated).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    };
    tag(resp, latency)
}
