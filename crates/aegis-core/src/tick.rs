//! One full pass: synthesize both snapshots, derive the alert feed, and score
//! governance over the reduced views.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::alerts::{generate_feed_alerts, AlertItem};
use crate::flags::SimulationFlags;
use crate::governance::{
    GovLlmView, GovMlView, GovernanceResult, GovernanceScorer, ScoreBreakdown,
};
use crate::metrics::{generate_llm_metrics, generate_ml_metrics, LlmMetrics, MlMetrics};
use crate::status::{dashboard_risk, llm_status, ml_status, DashboardRisk, StatusBadge};

/// Composite response of a tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub ml_metrics: MlMetrics,
    pub llm_metrics: LlmMetrics,
    pub alerts: Vec<AlertItem>,
    pub governance: GovernanceResult,
}

impl TickReport {
    pub fn ml_view(&self) -> GovMlView {
        GovMlView::from_snapshot(&self.ml_metrics)
    }

    pub fn llm_view(&self) -> GovLlmView {
        GovLlmView::project(&self.ml_metrics, &self.llm_metrics)
    }
}

pub fn run_tick<R: Rng + ?Sized>(
    rng: &mut R,
    flags: &SimulationFlags,
    scorer: &GovernanceScorer,
    at: DateTime<Utc>,
) -> TickReport {
    let ml = generate_ml_metrics(rng, flags, at);
    let llm = generate_llm_metrics(rng, flags, at);
    let alerts = generate_feed_alerts(&ml, &llm, at);

    let governance = scorer.evaluate(
        &GovMlView::from_snapshot(&ml),
        &GovLlmView::project(&ml, &llm),
    );

    TickReport {
        ml_metrics: ml,
        llm_metrics: llm,
        alerts,
        governance,
    }
}

/// A tick plus the transparency extras shown on the governance page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainedTick {
    #[serde(flatten)]
    pub tick: TickReport,
    pub breakdown: ScoreBreakdown,
    pub ml_status: StatusBadge,
    pub llm_status: StatusBadge,
    pub dashboard_risk: DashboardRisk,
}

pub fn run_explained_tick<R: Rng + ?Sized>(
    rng: &mut R,
    flags: &SimulationFlags,
    scorer: &GovernanceScorer,
    at: DateTime<Utc>,
) -> ExplainedTick {
    let tick = run_tick(rng, flags, scorer, at);
    let breakdown = scorer.explain(&tick.ml_view(), &tick.llm_view());
    ExplainedTick {
        breakdown,
        ml_status: ml_status(&tick.ml_metrics),
        llm_status: llm_status(&tick.llm_metrics),
        dashboard_risk: dashboard_risk(&tick.ml_metrics, &tick.llm_metrics),
        tick,
    }
}
