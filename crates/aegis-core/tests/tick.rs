//! Full tick: shape invariants and view projection.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use aegis_core::governance::{classify_risk, GovernanceScorer};
use aegis_core::{run_explained_tick, run_tick, SimulationFlags};

#[test]
fn tick_shape_is_invariant_across_calls() {
    let scorer = GovernanceScorer::default();
    let mut rng = StdRng::seed_from_u64(21);

    for flags in SimulationFlags::all() {
        for _ in 0..25 {
            let report = run_tick(&mut rng, &flags, &scorer, Utc::now());
            let json = serde_json::to_value(&report).unwrap();

            let mut keys: Vec<&str> = json
                .as_object()
                .unwrap()
                .keys()
                .map(|k| k.as_str())
                .collect();
            keys.sort_unstable();
            assert_eq!(keys, ["alerts", "governance", "llmMetrics", "mlMetrics"]);

            let gov = &json["governance"];
            let score = gov["ai_health_score"].as_f64().unwrap();
            assert!((0.0..=100.0).contains(&score));
            assert_eq!(gov["risk_level"], classify_risk(score).label());
            assert!(gov["alerts"].is_array());

            for alert in json["alerts"].as_array().unwrap() {
                assert_eq!(alert["acknowledged"], false);
                let kind = alert["type"].as_str().unwrap();
                assert!(["danger", "warning", "info"].contains(&kind));
            }
        }
    }
}

#[test]
fn governance_views_follow_projection_rules() {
    let scorer = GovernanceScorer::default();
    let mut rng = StdRng::seed_from_u64(8);
    let flags = SimulationFlags {
        trigger_hallucination: true,
        ..Default::default()
    };

    for _ in 0..100 {
        let report = run_tick(&mut rng, &flags, &scorer, Utc::now());
        let ml_view = report.ml_view();
        let llm_view = report.llm_view();

        assert_eq!(ml_view.drift, report.ml_metrics.drift_score);
        assert_eq!(llm_view.latency, report.ml_metrics.latency_ms / 1000.0);
        assert_eq!(llm_view.tokens, report.llm_metrics.token_usage);
        // attack regime keeps hallucination rate above 0.15
        assert_eq!(llm_view.hallucination, 1);
        assert_eq!(report.governance, scorer.evaluate(&ml_view, &llm_view));
    }
}

#[test]
fn quiet_tick_has_no_hallucination_in_view() {
    let scorer = GovernanceScorer::default();
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..100 {
        let report = run_tick(&mut rng, &SimulationFlags::default(), &scorer, Utc::now());
        assert_eq!(report.llm_view().hallucination, 0);
    }
}

#[test]
fn explained_tick_flattens_the_report() {
    let scorer = GovernanceScorer::default();
    let mut rng = StdRng::seed_from_u64(12);
    let explained = run_explained_tick(&mut rng, &SimulationFlags::default(), &scorer, Utc::now());
    let json = serde_json::to_value(&explained).unwrap();

    for key in [
        "mlMetrics", "llmMetrics", "alerts", "governance", "breakdown", "mlStatus", "llmStatus",
        "dashboardRisk",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["breakdown"]["drift_impact"].is_number());
}
