//! dealgate gateway binary.
//!
//! Config path comes from `DEALGATE_CONFIG` (default `dealgate.yaml`; a
//! missing file means built-in defaults). Log level from `RUST_LOG`. A `.env`
//! file in the working directory is loaded before the token is read.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use dealgate_core::error::{DealGateError, Result};
use dealgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    config::load_dotenv();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "dealgate-gateway exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("DEALGATE_CONFIG").unwrap_or_else(|_| "dealgate.yaml".into());
    let cfg = config::load_or_default(&path)?;
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .map_err(|e| DealGateError::Config(format!("gateway.listen: {e}")))?;

    let state = app_state::AppState::new(cfg)?;

    tracing::info!(%listen, "dealgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| DealGateError::Internal(format!("failed to bind {listen}: {e}")))?;

    router::serve(listener, state).await
}
