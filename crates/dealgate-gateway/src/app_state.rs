//! Shared application state for the dealgate gateway.
//!
//! Holds the config, the metrics store and the upstream client. Everything
//! is constructed explicitly at startup and shared behind `Arc`; there is no
//! process-global state.

use std::sync::Arc;

use dealgate_core::error::Result;
use dealgate_core::metrics::MetricsStore;

use crate::config::{self, GatewayConfig};
use crate::upstream::{DealsApi, PipedriveClient};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<MetricsStore>,
    deals: Arc<dyn DealsApi>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build state with the real upstream client. The token is read from the
    /// environment variable named in `upstream.token_env`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let token = config::resolve_token(&cfg.upstream);
        let client = PipedriveClient::new(&cfg.upstream, token)?;
        tracing::info!(upstream = %client.deals_url(), "upstream client ready");
        Ok(Self::with_deals_api(cfg, Arc::new(client)))
    }

    /// Build state around any `DealsApi` implementation.
    pub fn with_deals_api(cfg: GatewayConfig, deals: Arc<dyn DealsApi>) -> Self {
        let metrics = Arc::new(MetricsStore::new(cfg.metrics.max_records_per_method));
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics,
            deals,
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<MetricsStore> {
        Arc::clone(&self.metrics)
    }

    pub fn deals(&self) -> Arc<dyn DealsApi> {
        Arc::clone(&self.deals)
    }
}
