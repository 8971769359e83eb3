//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use aegis_core::error::{AegisError, Result};

pub use schema::{AegisConfig, GatewaySection, LegacySection};

/// Config path used when `AEGIS_CONFIG` is unset.
pub const DEFAULT_PATH: &str = "aegis.yaml";

pub fn load_from_file(path: &str) -> Result<AegisConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AegisError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<AegisConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "config file not found; using defaults");
            Ok(AegisConfig::default())
        }
        Err(e) => Err(AegisError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<AegisConfig> {
    let cfg: AegisConfig = serde_yaml::from_str(s)
        .map_err(|e| AegisError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
