use serde::{Serialize, Serializer};

use super::config::{ExplainConfig, ScoringConfig};
use super::views::{GovLlmView, GovMlView};
use crate::sampling::round_to;

/// Ordered risk classification, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Stable,
    Monitoring,
    ElevatedRisk,
    Critical,
}

impl RiskLevel {
    /// Lowest score (inclusive) of each band; `Critical` has none.
    pub const STABLE_FLOOR: f64 = 90.0;
    pub const MONITORING_FLOOR: f64 = 75.0;
    pub const ELEVATED_FLOOR: f64 = 50.0;

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Stable => "STABLE",
            RiskLevel::Monitoring => "MONITORING",
            RiskLevel::ElevatedRisk => "ELEVATED RISK",
            RiskLevel::Critical => "CRITICAL – GOVERNANCE ACTION REQUIRED",
        }
    }

    /// Short, label-safe name for metrics.
    pub fn as_key(self) -> &'static str {
        match self {
            RiskLevel::Stable => "stable",
            RiskLevel::Monitoring => "monitoring",
            RiskLevel::ElevatedRisk => "elevated",
            RiskLevel::Critical => "critical",
        }
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}

/// Step function from score to label; first matching band wins.
pub fn classify_risk(score: f64) -> RiskLevel {
    if score >= RiskLevel::STABLE_FLOOR {
        RiskLevel::Stable
    } else if score >= RiskLevel::MONITORING_FLOOR {
        RiskLevel::Monitoring
    } else if score >= RiskLevel::ELEVATED_FLOOR {
        RiskLevel::ElevatedRisk
    } else {
        RiskLevel::Critical
    }
}

/// Plain-string governance alert over the reduced views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernanceAlert {
    DataDrift,
    AccuracyDegradation,
    HallucinationRisk,
    HighLatency,
    TokenCostSpike,
}

impl GovernanceAlert {
    pub fn as_str(self) -> &'static str {
        match self {
            GovernanceAlert::DataDrift => "Data Drift Detected",
            GovernanceAlert::AccuracyDegradation => "Model Accuracy Degradation",
            GovernanceAlert::HallucinationRisk => "Hallucination Risk",
            GovernanceAlert::HighLatency => "High Latency",
            GovernanceAlert::TokenCostSpike => "Token Cost Spike",
        }
    }
}

impl Serialize for GovernanceAlert {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Independent threshold checks, always emitted in the same order.
///
/// These thresholds are fixed and unrelated to [`ScoringConfig`].
pub fn governance_alerts(ml: &GovMlView, llm: &GovLlmView) -> Vec<GovernanceAlert> {
    let checks = [
        (ml.drift > 0.2, GovernanceAlert::DataDrift),
        (ml.accuracy < 0.8, GovernanceAlert::AccuracyDegradation),
        (llm.hallucination == 1, GovernanceAlert::HallucinationRisk),
        (llm.latency > 2.0, GovernanceAlert::HighLatency),
        (llm.tokens > 1200, GovernanceAlert::TokenCostSpike),
    ];
    checks
        .into_iter()
        .filter_map(|(fired, alert)| fired.then_some(alert))
        .collect()
}

/// Scored governance verdict, serialized with the wire's snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceResult {
    pub ai_health_score: f64,
    pub risk_level: RiskLevel,
    pub alerts: Vec<GovernanceAlert>,
}

/// Per-signal contributions for display. Computed with the explainability
/// weights, so the parts do not sum to `100 - ai_health_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub drift_impact: f64,
    pub accuracy_impact: f64,
    pub hallucination_impact: f64,
    pub latency_impact: f64,
    pub cost_impact: f64,
}

/// Health scorer bound to one set of weights and caps.
#[derive(Debug, Clone, Default)]
pub struct GovernanceScorer {
    scoring: ScoringConfig,
    explain: ExplainConfig,
}

impl GovernanceScorer {
    pub fn new(scoring: ScoringConfig, explain: ExplainConfig) -> Self {
        Self { scoring, explain }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn explain_config(&self) -> &ExplainConfig {
        &self.explain
    }

    /// Weighted penalty before clamping. Each risk is `signal / cap`, capped
    /// at 1 (accuracy and hallucination are used as-is).
    pub fn raw_penalty(&self, ml: &GovMlView, llm: &GovLlmView) -> f64 {
        let cfg = &self.scoring;
        let w = &cfg.weights;

        let drift_risk = (ml.drift / cfg.drift_cap).min(1.0);
        let accuracy_risk = 1.0 - ml.accuracy;
        let latency_risk = (llm.latency / cfg.latency_cap_secs).min(1.0);
        let cost_risk = (f64::from(llm.tokens) / cfg.token_cap).min(1.0);
        let hallucination_risk = f64::from(llm.hallucination);

        drift_risk * w.drift
            + accuracy_risk * w.accuracy
            + hallucination_risk * w.hallucination
            + latency_risk * w.latency
            + cost_risk * w.cost
    }

    /// Health score in `[0, 100]`, rounded to 2 decimals. A non-finite penalty
    /// scores 0.
    pub fn compute_health(&self, ml: &GovMlView, llm: &GovLlmView) -> f64 {
        let score = 100.0 - self.raw_penalty(ml, llm);
        if !score.is_finite() {
            return 0.0;
        }
        round_to(score.clamp(0.0, 100.0), 2)
    }

    /// Score, classify, and collect governance alerts.
    pub fn evaluate(&self, ml: &GovMlView, llm: &GovLlmView) -> GovernanceResult {
        let score = self.compute_health(ml, llm);
        let result = GovernanceResult {
            ai_health_score: score,
            risk_level: classify_risk(score),
            alerts: governance_alerts(ml, llm),
        };
        tracing::debug!(
            score,
            risk = result.risk_level.as_key(),
            alerts = result.alerts.len(),
            "governance evaluated"
        );
        result
    }

    /// Uncapped per-signal contributions using the explainability weights.
    pub fn explain(&self, ml: &GovMlView, llm: &GovLlmView) -> ScoreBreakdown {
        let w = &self.explain.weights;
        ScoreBreakdown {
            drift_impact: ml.drift * w.drift,
            accuracy_impact: (1.0 - ml.accuracy) * w.accuracy,
            hallucination_impact: f64::from(llm.hallucination) * w.hallucination,
            latency_impact: llm.latency * w.latency,
            cost_impact: f64::from(llm.tokens) / 1000.0 * w.cost,
        }
    }
}
