//! Shared application state for the AegisAI gateway.
//!
//! Holds only immutable config, the configured scorer, and the lock-free
//! metrics registry. Every request synthesizes with its own RNG.

use std::sync::Arc;

use aegis_core::error::Result;
use aegis_core::governance::GovernanceScorer;
use aegis_core::legacy::Pacing;

use crate::config::AegisConfig;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: AegisConfig,
    scorer: GovernanceScorer,
}

impl AppState {
    /// Build application state from a config that has not necessarily been
    /// validated yet.
    pub fn new(cfg: AegisConfig) -> Result<Self> {
        cfg.validate()?;

        if !cfg.gateway.cors_permissive {
            tracing::warn!("CORS layer disabled; cross-origin dashboards will be blocked");
        }

        let scorer = GovernanceScorer::new(cfg.scoring.clone(), cfg.explain.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, scorer }),
            metrics: Arc::new(GatewayMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &AegisConfig {
        &self.inner.cfg
    }

    pub fn scorer(&self) -> &GovernanceScorer {
        &self.inner.scorer
    }

    pub fn pacing(&self) -> Pacing {
        if self.inner.cfg.legacy.realtime_pacing {
            Pacing::RealTime
        } else {
            Pacing::Simulated
        }
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
