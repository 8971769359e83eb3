//! AegisAI gateway binary.
//!
//! - `GET /api/tick?triggerDrift=..&triggerHallucination=..&triggerCost=..&triggerSafety=..`
//! - Config from `AEGIS_CONFIG` (default `aegis.yaml`, defaults if missing)
//! - Graceful shutdown on ctrl-c flips `/readyz` to draining

use tracing_subscriber::{fmt, EnvFilter};

use aegis_core::error::{AegisError, Result};
use aegis_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "aegis-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("AEGIS_CONFIG").unwrap_or_else(|_| config::DEFAULT_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "aegis-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| AegisError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| AegisError::Internal(format!("server failed: {e}")))?;

    tracing::info!("aegis-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    state.metrics().set_draining();
    tracing::info!("shutdown requested; draining");
}
