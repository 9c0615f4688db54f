use serde::Deserialize;
use dealgate_core::error::{DealGateError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub upstream: UpstreamSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            upstream: UpstreamSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DealGateError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.upstream.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(DealGateError::Config(format!(
                "gateway.listen must be a valid socket address, got {:?}",
                self.listen
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// API root; `/deals` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the `api_token`.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Per-call timeout. Unset means wait forever.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_env: default_token_env(),
            timeout_ms: None,
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DealGateError::Config(
                "upstream.base_url must start with http:// or https://".into(),
            ));
        }
        if self.token_env.is_empty() {
            return Err(DealGateError::Config("upstream.token_env must not be empty".into()));
        }
        if self.timeout_ms == Some(0) {
            return Err(DealGateError::Config(
                "upstream.timeout_ms must be greater than 0 (omit it to disable)".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// 0 keeps every record for the life of the process.
    #[serde(default)]
    pub max_records_per_method: usize,
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_base_url() -> String {
    "https://api.pipedrive.com/v1".into()
}
fn default_token_env() -> String {
    "API_KEY".into()
}
