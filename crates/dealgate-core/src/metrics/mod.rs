//! Per-request latency metrics.
//!
//! One [`MetricRecord`] is built per completed request and appended to the
//! [`MetricsStore`] in a single operation, so concurrent requests of the same
//! method can never write into each other's record.

pub mod record;
pub mod store;

pub use record::{HttpMethod, MetricRecord};
pub use store::{MetricsSnapshot, MetricsStore};
