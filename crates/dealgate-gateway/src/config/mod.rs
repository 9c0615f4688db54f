//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dealgate_core::error::{DealGateError, Result};

pub use schema::{GatewayConfig, GatewaySection, MetricsSection, UpstreamSection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DealGateError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| DealGateError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "no config file, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(DealGateError::Config(format!("read config failed: {e}"))),
    }
}

/// Read the upstream token from the environment variable the config names.
/// A missing variable is not fatal: upstream will reject the call and that
/// rejection is forwarded to the client.
pub fn resolve_token(upstream: &UpstreamSection) -> String {
    match std::env::var(&upstream.token_env) {
        Ok(t) => t,
        Err(_) => {
            tracing::warn!(
                var = %upstream.token_env,
                "upstream token not set; requests will be unauthenticated"
            );
            String::new()
        }
    }
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables already set win. A missing file is normal.
pub fn load_dotenv() {
    report_dotenv(dotenvy::dotenv());
}

/// Load a specific env file; same precedence rules as [`load_dotenv`].
pub fn load_dotenv_from(path: &Path) {
    report_dotenv(dotenvy::from_path(path).map(|_| path.to_path_buf()));
}

fn report_dotenv(res: std::result::Result<PathBuf, dotenvy::Error>) {
    match res {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("no .env file"),
        Err(e) => tracing::warn!(error = %e, ".env file ignored"),
    }
}
