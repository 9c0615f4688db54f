use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use dealgate_core::error::{DealGateError, Result};
use dealgate_core::protocol::pipedrive::ErrorEnvelope;

use crate::config::UpstreamSection;

use super::DealsApi;

const TOKEN_PARAM: &str = "api_token";

/// reqwest-backed client for the Pipedrive `/deals` resource.
#[derive(Debug, Clone)]
pub struct PipedriveClient {
    http: reqwest::Client,
    deals_url: Url,
    token: String,
}

impl PipedriveClient {
    pub fn new(cfg: &UpstreamSection, token: String) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = cfg.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder
            .build()
            .map_err(|e| DealGateError::Config(format!("http client build failed: {e}")))?;

        let deals_url = Url::parse(&format!("{}/deals", cfg.base_url.trim_end_matches('/')))
            .map_err(|e| DealGateError::Config(format!("invalid upstream.base_url: {e}")))?;

        Ok(Self {
            http,
            deals_url,
            token,
        })
    }

    pub fn deals_url(&self) -> &Url {
        &self.deals_url
    }

    /// Token first, then caller params; a caller-supplied token replaces ours.
    fn auth_query(&self, caller: &[(String, String)]) -> Vec<(String, String)> {
        let mut q = Vec::with_capacity(caller.len() + 1);
        if !caller.iter().any(|(k, _)| k == TOKEN_PARAM) {
            q.push((TOKEN_PARAM.to_string(), self.token.clone()));
        }
        q.extend(caller.iter().cloned());
        q
    }

    fn deal_url(&self, id: &str) -> Result<Url> {
        let mut url = self.deals_url.clone();
        url.path_segments_mut()
            .map_err(|_| DealGateError::Internal("upstream url cannot be a base".into()))?
            .push(id);
        Ok(url)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Value> {
        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();

        if !status.is_success() {
            let body = match resp.bytes().await {
                Ok(b) => b,
                Err(e) => {
                    tracing::debug!(
                        status = status.as_u16(),
                        error = %e.without_url(),
                        "upstream error body unreadable"
                    );
                    Default::default()
                }
            };
            let env = ErrorEnvelope::from_slice(&body);
            return Err(DealGateError::Upstream {
                status: status.as_u16(),
                info: env.error,
                success: env.success,
            });
        }

        resp.json::<Value>().await.map_err(transport)
    }
}

/// Flatten the error chain into one message. The request URL is stripped
/// first: it carries `api_token` and the message is sent back to clients.
fn transport(e: reqwest::Error) -> DealGateError {
    let e = e.without_url();
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    DealGateError::Transport(msg)
}

#[async_trait]
impl DealsApi for PipedriveClient {
    async fn list(&self, query: &[(String, String)]) -> Result<Value> {
        let req = self
            .http
            .get(self.deals_url.clone())
            .query(&self.auth_query(query));
        self.send(req).await
    }

    async fn create(&self, body: &Value) -> Result<Value> {
        let req = self
            .http
            .post(self.deals_url.clone())
            .query(&self.auth_query(&[]))
            .json(body);
        self.send(req).await
    }

    async fn update(&self, id: &str, body: &Value) -> Result<Value> {
        let req = self
            .http
            .put(self.deal_url(id)?)
            .query(&self.auth_query(&[]))
            .json(body);
        self.send(req).await
    }
}
