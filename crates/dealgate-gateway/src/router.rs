//! Axum router wiring.
//!
//! `/deals` proxies to the upstream CRM; `/metrics` and `/healthz` are local.
//! The metrics middleware wraps every route.

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;

use dealgate_core::error::{DealGateError, Result};

use crate::{api::deals, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/deals",
            get(deals::list_deals)
                .post(deals::create_deal)
                .put(deals::update_deal),
        )
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_request,
        ))
        .with_state(state)
}

/// Serve the gateway on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| DealGateError::Internal(format!("server failed: {e}")))
}
