use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;

use aegis_core::{run_explained_tick, run_tick, ExplainedTick, SimulationFlags, TickReport};

use super::query::{accept, FlagQuery};
use super::ApiError;
use crate::app_state::AppState;

pub async fn tick(
    State(app): State<AppState>,
    q: Result<Query<FlagQuery>, QueryRejection>,
) -> Result<Json<TickReport>, ApiError> {
    let flags: SimulationFlags = accept(q)?.into();
    let started = Instant::now();

    let mut rng = StdRng::from_entropy();
    let report = run_tick(&mut rng, &flags, app.scorer(), Utc::now());

    app.metrics().observe_tick("tick", &report, started.elapsed());
    tracing::info!(
        ?flags,
        score = report.governance.ai_health_score,
        risk = report.governance.risk_level.as_key(),
        feed_alerts = report.alerts.len(),
        "tick served"
    );

    Ok(Json(report))
}

pub async fn explain(
    State(app): State<AppState>,
    q: Result<Query<FlagQuery>, QueryRejection>,
) -> Result<Json<ExplainedTick>, ApiError> {
    let flags: SimulationFlags = accept(q)?.into();
    let started = Instant::now();

    let mut rng = StdRng::from_entropy();
    let explained = run_explained_tick(&mut rng, &flags, app.scorer(), Utc::now());

    app.metrics().observe_tick("explain", &explained.tick, started.elapsed());
    tracing::info!(
        ?flags,
        score = explained.tick.governance.ai_health_score,
        risk = explained.tick.governance.risk_level.as_key(),
        "explained tick served"
    );

    Ok(Json(explained))
}
