//! Governance scoring pipeline.
//!
//! Takes the two reduced views ([`GovMlView`], [`GovLlmView`]), normalizes each
//! signal against a cap, combines the risks into a weighted penalty, and
//! derives a 0–100 health score, a [`RiskLevel`], and the plain-string
//! governance alert list.
//!
//! Weights and caps are carried by [`ScoringConfig`]; the explainability
//! breakdown uses its own [`ExplainConfig`] whose default weights differ from
//! the scoring ones. The two are intentionally not unified.

pub mod config;
pub mod scorer;
pub mod views;

pub use config::{ExplainConfig, RiskWeights, ScoringConfig};
pub use scorer::{
    classify_risk, governance_alerts, GovernanceAlert, GovernanceResult, GovernanceScorer,
    RiskLevel, ScoreBreakdown,
};
pub use views::{GovLlmView, GovMlView};
