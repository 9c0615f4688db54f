use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use dealgate_core::metrics::{HttpMethod, MetricRecord};

use crate::api::UpstreamLatency;
use crate::app_state::AppState;

/// Time the request and record it. Never alters or fails the response.
/// Methods other than GET/POST/PUT pass through untracked.
pub async fn track_request(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let method = HttpMethod::from_token(req.method().as_str());
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let resp = next.run(req).await;

    if let Some(method) = method {
        let latency = resp.extensions().get::<UpstreamLatency>().map(|l| l.0);
        let rec = MetricRecord::new(method, resp.status().as_u16(), started.elapsed(), latency);
        tracing::debug!(
            %method,
            %path,
            status = rec.status_code,
            duration_ms = rec.duration,
            latency_ms = ?rec.latency,
            "request recorded"
        );
        app.metrics().record(rec);
    }

    resp
}
