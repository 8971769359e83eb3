use serde::{Deserialize, Serialize};

use crate::error::{AegisError, Result};

/// Per-signal weights. Scoring and explainability each carry their own set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskWeights {
    pub drift: f64,
    pub accuracy: f64,
    pub hallucination: f64,
    pub latency: f64,
    pub cost: f64,
}

impl RiskWeights {
    /// Weights used by the health score.
    pub const SCORING: RiskWeights = RiskWeights {
        drift: 25.0,
        accuracy: 25.0,
        hallucination: 20.0,
        latency: 5.0,
        cost: 10.0,
    };

    /// Weights used by the explainability breakdown.
    pub const EXPLAIN: RiskWeights = RiskWeights {
        drift: 30.0,
        accuracy: 20.0,
        hallucination: 20.0,
        latency: 10.0,
        cost: 20.0,
    };

    fn validate(&self, section: &str) -> Result<()> {
        let all = [
            ("drift", self.drift),
            ("accuracy", self.accuracy),
            ("hallucination", self.hallucination),
            ("latency", self.latency),
            ("cost", self.cost),
        ];
        for (name, w) in all {
            if !w.is_finite() || w < 0.0 {
                return Err(AegisError::BadRequest(format!(
                    "{section}.weights.{name} must be a finite, non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// Health-score parameters: weights plus the normalization caps each raw
/// signal is divided by before being capped at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "default_scoring_weights")]
    pub weights: RiskWeights,

    /// Drift (PSI) treated as fully severe.
    #[serde(default = "default_drift_cap")]
    pub drift_cap: f64,

    /// Latency in seconds treated as fully risky.
    #[serde(default = "default_latency_cap_secs")]
    pub latency_cap_secs: f64,

    /// Token count treated as a full cost risk.
    #[serde(default = "default_token_cap")]
    pub token_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: default_scoring_weights(),
            drift_cap: default_drift_cap(),
            latency_cap_secs: default_latency_cap_secs(),
            token_cap: default_token_cap(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate("scoring")?;
        let caps = [
            ("drift_cap", self.drift_cap),
            ("latency_cap_secs", self.latency_cap_secs),
            ("token_cap", self.token_cap),
        ];
        for (name, cap) in caps {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(AegisError::BadRequest(format!(
                    "scoring.{name} must be a finite, positive number"
                )));
            }
        }
        Ok(())
    }
}

fn default_scoring_weights() -> RiskWeights {
    RiskWeights::SCORING
}
fn default_drift_cap() -> f64 {
    0.3
}
fn default_latency_cap_secs() -> f64 {
    3.0
}
fn default_token_cap() -> f64 {
    1500.0
}

/// Explainability parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplainConfig {
    #[serde(default = "default_explain_weights")]
    pub weights: RiskWeights,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            weights: default_explain_weights(),
        }
    }
}

impl ExplainConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate("explain")
    }
}

fn default_explain_weights() -> RiskWeights {
    RiskWeights::EXPLAIN
}
