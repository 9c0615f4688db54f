use std::collections::VecDeque;

use dashmap::DashMap;
use serde::Serialize;

use super::record::{HttpMethod, MetricRecord};

/// In-memory metrics keyed by method, in completion order.
///
/// Appends go through the DashMap shard lock, so each record lands whole.
/// `max_per_method == 0` keeps everything for the life of the store;
/// otherwise the oldest record of that method is dropped first.
#[derive(Debug, Default)]
pub struct MetricsStore {
    lanes: DashMap<HttpMethod, VecDeque<MetricRecord>>,
    max_per_method: usize,
}

/// Point-in-time copy of the store, serialized as
/// `{"GET": [...], "POST": [...], "PUT": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    #[serde(rename = "GET")]
    pub get: Vec<MetricRecord>,
    #[serde(rename = "POST")]
    pub post: Vec<MetricRecord>,
    #[serde(rename = "PUT")]
    pub put: Vec<MetricRecord>,
}

impl MetricsSnapshot {
    pub fn lane(&self, method: HttpMethod) -> &[MetricRecord] {
        match method {
            HttpMethod::Get => &self.get,
            HttpMethod::Post => &self.post,
            HttpMethod::Put => &self.put,
        }
    }
}

impl MetricsStore {
    pub fn new(max_per_method: usize) -> Self {
        Self {
            lanes: DashMap::new(),
            max_per_method,
        }
    }

    /// Store with no retention bound.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Append one complete record.
    pub fn record(&self, rec: MetricRecord) {
        let mut lane = self.lanes.entry(rec.method).or_default();
        if self.max_per_method > 0 {
            while lane.len() >= self.max_per_method {
                lane.pop_front();
            }
        }
        lane.push_back(rec);
    }

    pub fn len(&self, method: HttpMethod) -> usize {
        self.lanes.get(&method).map(|l| l.len()).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.lanes.iter().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let copy = |m: HttpMethod| -> Vec<MetricRecord> {
            self.lanes
                .get(&m)
                .map(|l| l.iter().cloned().collect())
                .unwrap_or_default()
        };
        MetricsSnapshot {
            get: copy(HttpMethod::Get),
            post: copy(HttpMethod::Post),
            put: copy(HttpMethod::Put),
        }
    }

    /// Drop every record (test teardown, operator reset).
    pub fn reset(&self) {
        self.lanes.clear();
        tracing::debug!("metrics store reset");
    }
}
