use std::net::SocketAddr;

use serde::Deserialize;

use aegis_core::error::{AegisError, Result};
use aegis_core::governance::{ExplainConfig, ScoringConfig};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AegisConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub explain: ExplainConfig,

    #[serde(default)]
    pub legacy: LegacySection,
}

impl Default for AegisConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            scoring: ScoringConfig::default(),
            explain: ExplainConfig::default(),
            legacy: LegacySection::default(),
        }
    }
}

impl AegisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AegisError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.scoring.validate()?;
        self.explain.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Any origin, method, and header. Turning it off breaks a dashboard
    /// served from another origin.
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            AegisError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_cors_permissive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacySection {
    /// Sleep for the simulated chatbot delay instead of only reporting it.
    #[serde(default = "default_realtime_pacing")]
    pub realtime_pacing: bool,
}

impl Default for LegacySection {
    fn default() -> Self {
        Self {
            realtime_pacing: default_realtime_pacing(),
        }
    }
}

fn default_realtime_pacing() -> bool {
    true
}
