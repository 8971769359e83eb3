//! Legacy probe endpoints.
//!
//! Both answer with the probe payload even when the probe faults; the fault
//! only shows up in the payload's alarm values and in
//! `aegis_probe_fallbacks_total`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;

use aegis_core::legacy::{
    probe_drift, probe_llm_call, DriftReport, DriftStatus, LlmCallReport, ReferenceModel,
    SimulatedChatbot, SyntheticFeed,
};

use super::query::{accept, AttackQuery, DriftQuery};
use super::ApiError;
use crate::app_state::AppState;

pub async fn llm_probe(
    State(app): State<AppState>,
    q: Result<Query<AttackQuery>, QueryRejection>,
) -> Result<Json<LlmCallReport>, ApiError> {
    let attack = accept(q)?.attack();
    let pacing = app.pacing();

    // The real-time chatbot blocks for up to 2.5s.
    let report = tokio::task::spawn_blocking(move || {
        let mut bot = SimulatedChatbot::new(StdRng::from_entropy(), pacing);
        probe_llm_call(&mut bot, attack)
    })
    .await
    .unwrap_or_else(|e| {
        tracing::warn!(error = %e, attack, "llm probe task failed; reporting failsafe");
        LlmCallReport::FAILSAFE
    });

    if report == LlmCallReport::FAILSAFE {
        app.metrics().probe_fallbacks.inc(&[("probe", "llm")]);
    }
    tracing::info!(
        attack,
        latency = report.latency,
        tokens = report.tokens,
        "llm probe served"
    );

    Ok(Json(report))
}

pub async fn drift_probe(
    State(app): State<AppState>,
    q: Result<Query<DriftQuery>, QueryRejection>,
) -> Result<Json<DriftReport>, ApiError> {
    let drift = accept(q)?.drift();

    let mut feed = SyntheticFeed::new(StdRng::from_entropy());
    let report = probe_drift(&mut feed, &ReferenceModel::default(), drift);

    if report.status == DriftStatus::Error {
        app.metrics().probe_fallbacks.inc(&[("probe", "drift")]);
    }
    tracing::info!(
        trigger_drift = drift,
        drift = report.drift,
        status = ?report.status,
        "drift probe served"
    );

    Ok(Json(report))
}
