#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::Utc;

use aegis_core::metrics::{LlmMetrics, MlMetrics};
use aegis_core::status::{dashboard_risk, llm_status, ml_status, DashboardRiskLevel, StatusLevel};

fn ml(drift_score: f64, accuracy: f64, bias_score: f64) -> MlMetrics {
    MlMetrics {
        accuracy,
        precision: 0.9,
        recall: 0.9,
        f1: 0.9,
        drift_score,
        bias_score,
        latency_ms: 80.0,
        throughput: 780.0,
        timestamp: Utc::now(),
    }
}

fn llm(latency_ms: f64, hallucination_rate: f64, safety_flag: bool) -> LlmMetrics {
    LlmMetrics {
        latency_ms,
        token_usage: 400,
        cost_usd: 0.01,
        hallucination_rate,
        safety_flag,
        throughput_rpm: 90.0,
        context_length: 2048,
        timestamp: Utc::now(),
    }
}

#[test]
fn ml_status_bands() {
    assert_eq!(ml_status(&ml(0.5, 0.95, 0.05)).level, StatusLevel::Danger);
    assert_eq!(ml_status(&ml(0.3, 0.95, 0.05)).label, "Warning");
    assert_eq!(ml_status(&ml(0.1, 0.81, 0.05)).level, StatusLevel::Warning);
    assert_eq!(ml_status(&ml(0.1, 0.95, 0.05)).label, "Stable");
}

#[test]
fn llm_status_bands() {
    assert_eq!(llm_status(&llm(500.0, 0.03, true)).label, "Unsafe");
    assert_eq!(
        llm_status(&llm(500.0, 0.25, false)).level,
        StatusLevel::Danger
    );
    assert_eq!(llm_status(&llm(2100.0, 0.03, false)).label, "Degraded");
    assert_eq!(
        llm_status(&llm(500.0, 0.12, false)).level,
        StatusLevel::Warning
    );
    assert_eq!(llm_status(&llm(500.0, 0.03, false)).label, "Safe");
}

#[test]
fn dashboard_risk_adds_points_and_caps() {
    let quiet = dashboard_risk(&ml(0.1, 0.95, 0.05), &llm(500.0, 0.03, false));
    assert_eq!(quiet.score, 0);
    assert_eq!(quiet.level, DashboardRiskLevel::Low);

    let medium = dashboard_risk(&ml(0.3, 0.95, 0.05), &llm(500.0, 0.12, false));
    assert_eq!(medium.score, 36);
    assert_eq!(medium.level, DashboardRiskLevel::Medium);

    let worst = dashboard_risk(&ml(0.6, 0.7, 0.2), &llm(3000.0, 0.4, true));
    assert_eq!(worst.score, 100);
    assert_eq!(worst.level, DashboardRiskLevel::High);

    let json = serde_json::to_value(worst).unwrap();
    assert_eq!(json["level"], "HIGH");
}
