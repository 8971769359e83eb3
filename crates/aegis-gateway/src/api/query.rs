//! Query-string parsing for the flag endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use aegis_core::error::AegisError;
use aegis_core::SimulationFlags;

/// Parse a boolean the way HTML forms and query builders spell it.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    let raw = String::deserialize(d)?;
    parse_flag(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid boolean: {raw:?}")))
}

/// Simulation flags, each optional and defaulting to `false`.
///
/// Every flag has a long (`triggerDrift`) and a short (`drift`) spelling. Both
/// may appear in one query; the flag is on if either spelling says so.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlagQuery {
    #[serde(rename = "triggerDrift", deserialize_with = "lenient_bool")]
    pub trigger_drift: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub drift: Option<bool>,
    #[serde(rename = "triggerHallucination", deserialize_with = "lenient_bool")]
    pub trigger_hallucination: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub hallucination: Option<bool>,
    #[serde(rename = "triggerCost", deserialize_with = "lenient_bool")]
    pub trigger_cost: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub cost: Option<bool>,
    #[serde(rename = "triggerSafety", deserialize_with = "lenient_bool")]
    pub trigger_safety: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub safety: Option<bool>,
}

fn either(long: Option<bool>, short: Option<bool>) -> bool {
    long.unwrap_or(false) || short.unwrap_or(false)
}

impl From<FlagQuery> for SimulationFlags {
    fn from(q: FlagQuery) -> Self {
        SimulationFlags {
            trigger_drift: either(q.trigger_drift, q.drift),
            trigger_hallucination: either(q.trigger_hallucination, q.hallucination),
            trigger_cost: either(q.trigger_cost, q.cost),
            trigger_safety: either(q.trigger_safety, q.safety),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AttackQuery {
    #[serde(deserialize_with = "lenient_bool")]
    attack: Option<bool>,
    #[serde(rename = "triggerAttack", deserialize_with = "lenient_bool")]
    trigger_attack: Option<bool>,
}

impl AttackQuery {
    pub fn attack(&self) -> bool {
        either(self.trigger_attack, self.attack)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DriftQuery {
    #[serde(deserialize_with = "lenient_bool")]
    drift: Option<bool>,
    #[serde(rename = "triggerDrift", deserialize_with = "lenient_bool")]
    trigger_drift: Option<bool>,
}

impl DriftQuery {
    pub fn drift(&self) -> bool {
        either(self.trigger_drift, self.drift)
    }
}

/// Turn axum's rejection into our client-facing error.
pub fn accept<T>(q: Result<Query<T>, QueryRejection>) -> Result<T, AegisError> {
    q.map(|Query(v)| v)
        .map_err(|e| AegisError::BadRequest(format!("invalid query: {}", e.body_text())))
}
