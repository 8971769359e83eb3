#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};

use aegis_core::alerts::{generate_feed_alerts, AlertKind};
use aegis_core::metrics::{LlmMetrics, MlMetrics};

fn at() -> chrono::DateTime<Utc> {
    Utc.timestamp_millis_opt(1_714_564_800_123).unwrap()
}

fn quiet_ml() -> MlMetrics {
    MlMetrics {
        accuracy: 0.93,
        precision: 0.91,
        recall: 0.89,
        f1: 0.9,
        drift_score: 0.1,
        bias_score: 0.05,
        latency_ms: 80.0,
        throughput: 780.0,
        timestamp: at(),
    }
}

fn quiet_llm() -> LlmMetrics {
    LlmMetrics {
        latency_ms: 700.0,
        token_usage: 420,
        cost_usd: 0.0105,
        hallucination_rate: 0.03,
        safety_flag: false,
        throughput_rpm: 90.0,
        context_length: 2400,
        timestamp: at(),
    }
}

#[test]
fn quiet_snapshots_raise_nothing() {
    let alerts = generate_feed_alerts(&quiet_ml(), &quiet_llm(), at());
    assert!(alerts.is_empty());
}

#[test]
fn drift_alert_is_strictly_above_threshold() {
    let mut ml = quiet_ml();
    ml.drift_score = 0.4;
    assert!(generate_feed_alerts(&ml, &quiet_llm(), at()).is_empty());

    ml.drift_score = 0.4001;
    let alerts = generate_feed_alerts(&ml, &quiet_llm(), at());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "ML Model Drift Detected");
    assert_eq!(alerts[0].kind, AlertKind::Danger);
    assert_eq!(alerts[0].id, "drift-1714564800123");
    assert_eq!(
        alerts[0].message,
        "PSI drift score 40.0% exceeds threshold. Model retraining recommended."
    );
    assert!(!alerts[0].acknowledged);
}

#[test]
fn every_condition_fires_in_order() {
    let ml = MlMetrics {
        drift_score: 0.62,
        accuracy: 0.75,
        bias_score: 0.15,
        ..quiet_ml()
    };
    let llm = LlmMetrics {
        safety_flag: true,
        hallucination_rate: 0.3,
        latency_ms: 2400.4,
        ..quiet_llm()
    };

    let alerts = generate_feed_alerts(&ml, &llm, at());
    let ids: Vec<&str> = alerts.iter().map(|a| a.id.split('-').next().unwrap()).collect();
    assert_eq!(ids, ["drift", "acc", "safety", "halluc", "latency", "bias"]);

    let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        [
            AlertKind::Danger,
            AlertKind::Warning,
            AlertKind::Danger,
            AlertKind::Warning,
            AlertKind::Warning,
            AlertKind::Info,
        ]
    );

    assert_eq!(
        alerts[1].message,
        "Model accuracy dropped to 75.0%. Performance SLA at risk."
    );
    assert_eq!(
        alerts[3].message,
        "Rate at 30.0% — exceeds 15% compliance threshold."
    );
    assert_eq!(
        alerts[4].message,
        "Response latency 2400ms exceeds 2000ms SLA threshold."
    );
    assert_eq!(
        alerts[5].message,
        "Fairness metric at 15.0%. Demographic audit triggered."
    );
}

#[test]
fn feed_uses_llm_latency_not_ml_latency() {
    let ml = MlMetrics {
        latency_ms: 500.0,
        ..quiet_ml()
    };
    let llm = LlmMetrics {
        latency_ms: 2000.0,
        ..quiet_llm()
    };
    assert!(generate_feed_alerts(&ml, &llm, at()).is_empty());
}

#[test]
fn alert_record_wire_shape() {
    let ml = MlMetrics {
        bias_score: 0.2,
        ..quiet_ml()
    };
    let alerts = generate_feed_alerts(&ml, &quiet_llm(), at());
    let json = serde_json::to_value(&alerts[0]).unwrap();

    assert_eq!(json["id"], "bias-1714564800123");
    assert_eq!(json["type"], "info");
    assert_eq!(json["title"], "Bias Score Elevated");
    assert_eq!(json["acknowledged"], false);
    assert_eq!(json["timestamp"], "2024-05-01T12:00:00.123000Z");
}
