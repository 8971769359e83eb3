//! Dashboard status badges and the additive dashboard risk score.
//!
//! These are coarse, threshold-only summaries for the overview cards. They are
//! independent of the governance health score.

use serde::Serialize;

use crate::metrics::{LlmMetrics, MlMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Stable,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub level: StatusLevel,
}

const fn badge(label: &'static str, level: StatusLevel) -> StatusBadge {
    StatusBadge { label, level }
}

pub fn ml_status(ml: &MlMetrics) -> StatusBadge {
    if ml.drift_score > 0.45 {
        badge("High Risk", StatusLevel::Danger)
    } else if ml.drift_score > 0.25 || ml.accuracy < 0.82 {
        badge("Warning", StatusLevel::Warning)
    } else {
        badge("Stable", StatusLevel::Stable)
    }
}

pub fn llm_status(llm: &LlmMetrics) -> StatusBadge {
    if llm.safety_flag || llm.hallucination_rate > 0.2 {
        badge("Unsafe", StatusLevel::Danger)
    } else if llm.latency_ms > 2000.0 || llm.hallucination_rate > 0.1 {
        badge("Degraded", StatusLevel::Warning)
    } else {
        badge("Safe", StatusLevel::Stable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DashboardRiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardRisk {
    pub score: u32,
    pub level: DashboardRiskLevel,
}

/// Additive points per tripped threshold, capped at 100.
pub fn dashboard_risk(ml: &MlMetrics, llm: &LlmMetrics) -> DashboardRisk {
    let mut score = 0u32;

    if ml.drift_score > 0.45 {
        score += 35;
    } else if ml.drift_score > 0.25 {
        score += 18;
    }
    if ml.accuracy < 0.8 {
        score += 20;
    }
    if ml.bias_score > 0.15 {
        score += 10;
    }
    if llm.safety_flag || llm.hallucination_rate > 0.2 {
        score += 35;
    } else if llm.hallucination_rate > 0.1 {
        score += 18;
    }
    if llm.latency_ms > 2500.0 {
        score += 10;
    }

    let score = score.min(100);
    let level = if score >= 60 {
        DashboardRiskLevel::High
    } else if score >= 30 {
        DashboardRiskLevel::Medium
    } else {
        DashboardRiskLevel::Low
    };
    DashboardRisk { score, level }
}
