//! UI alert feed.
//!
//! Unlike the governance alert list, the feed inspects the full snapshots,
//! uses its own (looser) thresholds, and emits structured records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metrics::{LlmMetrics, MlMetrics};

/// Severity shown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertItem {
    /// `<tag>-<unix millis>`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: String,
    #[serde(serialize_with = "crate::metrics::serialize_utc")]
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}

pub const DRIFT_SCORE_THRESHOLD: f64 = 0.4;
pub const ACCURACY_THRESHOLD: f64 = 0.82;
pub const HALLUCINATION_RATE_THRESHOLD: f64 = 0.15;
pub const LLM_LATENCY_MS_THRESHOLD: f64 = 2000.0;
pub const BIAS_SCORE_THRESHOLD: f64 = 0.14;

const SAFETY_INCIDENT_MESSAGE: &str =
    "Harmful content pattern detected in LLM response. HITL escalation initiated.";

/// Build the feed for one tick. Every record shares the same timestamp.
pub fn generate_feed_alerts(
    ml: &MlMetrics,
    llm: &LlmMetrics,
    at: DateTime<Utc>,
) -> Vec<AlertItem> {
    let millis = at.timestamp_millis();
    let mut alerts = Vec::new();
    let mut push = |tag: &str, kind: AlertKind, title: &'static str, message: String| {
        alerts.push(AlertItem {
            id: format!("{tag}-{millis}"),
            kind,
            title,
            message,
            timestamp: at,
            acknowledged: false,
        });
    };

    if ml.drift_score > DRIFT_SCORE_THRESHOLD {
        push(
            "drift",
            AlertKind::Danger,
            "ML Model Drift Detected",
            format!(
                "PSI drift score {:.1}% exceeds threshold. Model retraining recommended.",
                ml.drift_score * 100.0
            ),
        );
    }
    if ml.accuracy < ACCURACY_THRESHOLD {
        push(
            "acc",
            AlertKind::Warning,
            "Accuracy Degradation",
            format!(
                "Model accuracy dropped to {:.1}%. Performance SLA at risk.",
                ml.accuracy * 100.0
            ),
        );
    }
    if llm.safety_flag {
        push(
            "safety",
            AlertKind::Danger,
            "LLM Safety Incident",
            SAFETY_INCIDENT_MESSAGE.to_string(),
        );
    }
    if llm.hallucination_rate > HALLUCINATION_RATE_THRESHOLD {
        push(
            "halluc",
            AlertKind::Warning,
            "Elevated Hallucination Rate",
            format!(
                "Rate at {:.1}% — exceeds 15% compliance threshold.",
                llm.hallucination_rate * 100.0
            ),
        );
    }
    if llm.latency_ms > LLM_LATENCY_MS_THRESHOLD {
        push(
            "latency",
            AlertKind::Warning,
            "High LLM Latency",
            format!(
                "Response latency {:.0}ms exceeds 2000ms SLA threshold.",
                llm.latency_ms
            ),
        );
    }
    if ml.bias_score > BIAS_SCORE_THRESHOLD {
        push(
            "bias",
            AlertKind::Info,
            "Bias Score Elevated",
            format!(
                "Fairness metric at {:.1}%. Demographic audit triggered.",
                ml.bias_score * 100.0
            ),
        );
    }

    alerts
}
