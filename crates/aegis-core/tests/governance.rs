#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use aegis_core::governance::{
    classify_risk, governance_alerts, ExplainConfig, GovLlmView, GovMlView, GovernanceAlert,
    GovernanceScorer, RiskLevel, RiskWeights, ScoringConfig,
};
use aegis_core::sampling::round_to;

fn ml(drift: f64, accuracy: f64) -> GovMlView {
    GovMlView { drift, accuracy }
}

fn llm(latency: f64, tokens: u32, hallucination: u8) -> GovLlmView {
    GovLlmView {
        latency,
        tokens,
        hallucination,
    }
}

#[test]
fn classify_boundaries_are_inclusive() {
    assert_eq!(classify_risk(100.0), RiskLevel::Stable);
    assert_eq!(classify_risk(90.0), RiskLevel::Stable);
    assert_eq!(classify_risk(89.99), RiskLevel::Monitoring);
    assert_eq!(classify_risk(75.0), RiskLevel::Monitoring);
    assert_eq!(classify_risk(74.99), RiskLevel::ElevatedRisk);
    assert_eq!(classify_risk(50.0), RiskLevel::ElevatedRisk);
    assert_eq!(classify_risk(49.99), RiskLevel::Critical);
    assert_eq!(classify_risk(0.0), RiskLevel::Critical);
}

#[test]
fn classify_is_monotone_in_score() {
    let mut prev = classify_risk(0.0);
    for i in 0..=10_000 {
        let level = classify_risk(i as f64 / 100.0);
        assert!(level <= prev, "score={} level={:?}", i as f64 / 100.0, level);
        prev = level;
    }
}

#[test]
fn capped_drift_example_penalty() {
    let scorer = GovernanceScorer::default();
    let penalty = scorer.raw_penalty(&ml(0.5, 0.7), &llm(0.0, 0, 0));
    assert!((penalty - 32.5).abs() < 1e-9);

    let res = scorer.evaluate(&ml(0.5, 0.7), &llm(0.0, 0, 0));
    assert_eq!(res.ai_health_score, 67.5);
    assert_eq!(res.risk_level, RiskLevel::ElevatedRisk);
}

#[test]
fn exact_half_cent_scores_round_to_even() {
    let scorer = GovernanceScorer::default();
    // 100 - 0.375 * 25 = 90.625 exactly
    assert_eq!(
        scorer.compute_health(&ml(0.0, 0.625), &llm(0.0, 0, 0)),
        90.62
    );
    // 100 - 0.125 * 25 = 96.875 exactly
    assert_eq!(
        scorer.compute_health(&ml(0.0, 0.875), &llm(0.0, 0, 0)),
        96.88
    );

    assert_eq!(round_to(0.0625, 3), 0.062);
    assert_eq!(round_to(2.5, 0), 2.0);
    assert_eq!(round_to(3.5, 0), 4.0);
    assert_eq!(round_to(65.8333, 2), 65.83);
}

#[test]
fn hallucination_alert_iff_flag_is_one() {
    let grid_ml = [ml(0.0, 1.0), ml(0.9, 0.6), ml(0.25, 0.79)];
    let grid_llm = [(0.0, 0), (2.5, 1300), (1.0, 500)];

    for m in grid_ml {
        for (latency, tokens) in grid_llm {
            for hallucination in [0u8, 1] {
                let alerts = governance_alerts(&m, &llm(latency, tokens, hallucination));
                assert_eq!(
                    alerts.contains(&GovernanceAlert::HallucinationRisk),
                    hallucination == 1,
                );
            }
        }
    }
}

#[test]
fn alerts_keep_fixed_order() {
    let alerts = governance_alerts(&ml(0.21, 0.79), &llm(2.01, 1201, 1));
    assert_eq!(
        alerts,
        vec![
            GovernanceAlert::DataDrift,
            GovernanceAlert::AccuracyDegradation,
            GovernanceAlert::HallucinationRisk,
            GovernanceAlert::HighLatency,
            GovernanceAlert::TokenCostSpike,
        ]
    );
}

#[test]
fn score_stays_in_range_for_extreme_inputs() {
    let scorer = GovernanceScorer::default();
    let extremes = [
        (ml(-5.0, 3.0), llm(0.0, 0, 0)),
        (ml(50.0, -4.0), llm(1e9, u32::MAX, 1)),
        (ml(f64::NAN, 0.5), llm(1.0, 10, 0)),
        (ml(0.1, 0.9), llm(f64::INFINITY, 10, 0)),
    ];
    for (m, l) in extremes {
        let score = scorer.compute_health(&m, &l);
        assert!((0.0..=100.0).contains(&score), "score={score}");
    }
}

#[test]
fn custom_weights_override_defaults() {
    let scoring = ScoringConfig {
        weights: RiskWeights {
            drift: 100.0,
            accuracy: 0.0,
            hallucination: 0.0,
            latency: 0.0,
            cost: 0.0,
        },
        ..ScoringConfig::default()
    };
    let scorer = GovernanceScorer::new(scoring, ExplainConfig::default());

    assert_eq!(
        scorer.compute_health(&ml(0.15, 0.5), &llm(3.0, 1500, 1)),
        50.0
    );
    // penalty above 100 floors at zero
    assert_eq!(scorer.compute_health(&ml(0.3, 0.5), &llm(0.0, 0, 0)), 0.0);
}

#[test]
fn custom_caps_change_normalization() {
    let scoring = ScoringConfig {
        token_cap: 3000.0,
        ..ScoringConfig::default()
    };
    let scorer = GovernanceScorer::new(scoring, ExplainConfig::default());
    // 1500 / 3000 * 10 = 5
    assert_eq!(
        scorer.compute_health(&ml(0.0, 1.0), &llm(0.0, 1500, 0)),
        95.0
    );
}

#[test]
fn explain_uses_its_own_weights() {
    let scorer = GovernanceScorer::default();
    let b = scorer.explain(&ml(0.5, 0.7), &llm(1.0, 1000, 1));

    assert!((b.drift_impact - 15.0).abs() < 1e-9);
    assert!((b.accuracy_impact - 6.0).abs() < 1e-9);
    assert!((b.hallucination_impact - 20.0).abs() < 1e-9);
    assert!((b.latency_impact - 10.0).abs() < 1e-9);
    assert!((b.cost_impact - 20.0).abs() < 1e-9);

    // explain weights diverge from scoring weights, so the parts do not add up
    let sum = b.drift_impact
        + b.accuracy_impact
        + b.hallucination_impact
        + b.latency_impact
        + b.cost_impact;
    let penalty = scorer.raw_penalty(&ml(0.5, 0.7), &llm(1.0, 1000, 1));
    assert!((sum - penalty).abs() > 1.0);
}

#[test]
fn config_validation_rejects_bad_values() {
    let mut cfg = ScoringConfig::default();
    assert!(cfg.validate().is_ok());

    cfg.drift_cap = 0.0;
    assert_eq!(
        cfg.validate().unwrap_err().client_code().as_str(),
        "BAD_REQUEST"
    );

    let mut cfg = ScoringConfig::default();
    cfg.weights.cost = -1.0;
    assert!(cfg.validate().is_err());

    let mut explain = ExplainConfig::default();
    explain.weights.latency = f64::NAN;
    assert!(explain.validate().is_err());
}
