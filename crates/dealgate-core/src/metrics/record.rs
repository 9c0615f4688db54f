use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Methods the gateway keeps metrics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 3] = [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put];

    /// Parse an HTTP method token. Untracked methods return `None`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation of a request's latency and outcome. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    /// Milliseconds from request arrival to response produced.
    pub duration: f64,
    /// Milliseconds spent waiting on the upstream call, when one was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<f64>,
    pub method: HttpMethod,
    pub status_code: u16,
    /// Local wall-clock time the record was taken, e.g. `10/18/2026, 3:04:05 PM`.
    pub date: String,
}

impl MetricRecord {
    pub fn new(
        method: HttpMethod,
        status_code: u16,
        duration: Duration,
        latency: Option<Duration>,
    ) -> Self {
        Self {
            duration: as_millis_f64(duration),
            latency: latency.map(as_millis_f64),
            method,
            status_code,
            date: chrono::Local::now()
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
        }
    }
}

fn as_millis_f64(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}
