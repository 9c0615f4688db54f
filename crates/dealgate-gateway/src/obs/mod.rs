//! Request observation.
//!
//! The middleware here times every request and appends one complete
//! `MetricRecord` to the shared `MetricsStore` once the handler has produced
//! its response. The store itself lives in `dealgate-core`.

pub mod middleware;
