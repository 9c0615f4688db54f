//! Shared error type across dealgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body.
    BadRequest,
    /// PUT without a deal id.
    MissingDealId,
    /// Upstream answered with a non-2xx status.
    Upstream,
    /// Upstream could not be reached or answered garbage.
    Transport,
    /// Invalid configuration.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::MissingDealId => "MISSING_DEAL_ID",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DealGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum DealGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("No deal id provided in body.")]
    MissingDealId,
    /// Upstream responded non-2xx. `info`/`success` come from its
    /// `{success, error}` envelope when one could be decoded.
    #[error("upstream responded {status}")]
    Upstream {
        status: u16,
        info: Option<serde_json::Value>,
        success: Option<bool>,
    },
    #[error("{0}")]
    Transport(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DealGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DealGateError::BadRequest(_) => ClientCode::BadRequest,
            DealGateError::MissingDealId => ClientCode::MissingDealId,
            DealGateError::Upstream { .. } => ClientCode::Upstream,
            DealGateError::Transport(_) => ClientCode::Transport,
            DealGateError::Config(_) => ClientCode::Config,
            DealGateError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Label the HTTP client would attach to an upstream status failure:
    /// 4xx is the caller's fault, everything else is the server's.
    pub fn upstream_label(status: u16) -> &'static str {
        if (400..500).contains(&status) {
            "ERR_BAD_REQUEST"
        } else {
            "ERR_BAD_RESPONSE"
        }
    }
}
