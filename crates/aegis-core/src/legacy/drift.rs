//! Batch drift probe over a live feature feed.
//!
//! Rows are two-feature samples. Drift is the standardized mean shift of the
//! live batch against the reference window, and accuracy is how often a
//! reference-fitted linear rule agrees with the ground truth
//! `x0 + x1 > 100`.

use rand::Rng;
use serde::Serialize;

use crate::error::{AegisError, Result};
use crate::sampling::{gauss, round_to};

/// Reference window statistics per feature.
pub const REFERENCE_MEAN: [f64; 2] = [50.0, 50.0];
pub const REFERENCE_STD: [f64; 2] = [10.0, 10.0];

/// Shift applied to feature 0 when the feed is drifting.
pub const DRIFT_SHIFT: f64 = 15.0;

/// Drift above this marks the batch as drifting.
pub const DRIFT_STATUS_THRESHOLD: f64 = 0.25;

pub type Row = [f64; 2];

/// Source of live feature rows.
pub trait LiveDataSource {
    fn fetch(&mut self, trigger_drift: bool) -> Result<Vec<Row>>;
}

/// Gaussian rows around the reference mean, feature 0 shifted under drift.
pub struct SyntheticFeed<R> {
    rng: R,
    batch: usize,
}

impl<R: Rng> SyntheticFeed<R> {
    pub const DEFAULT_BATCH: usize = 200;

    pub fn new(rng: R) -> Self {
        Self::with_batch(rng, Self::DEFAULT_BATCH)
    }

    pub fn with_batch(rng: R, batch: usize) -> Self {
        Self { rng, batch }
    }
}

impl<R: Rng> LiveDataSource for SyntheticFeed<R> {
    fn fetch(&mut self, trigger_drift: bool) -> Result<Vec<Row>> {
        let shift = if trigger_drift { DRIFT_SHIFT } else { 0.0 };
        let rows = (0..self.batch)
            .map(|_| {
                [
                    gauss(&mut self.rng, REFERENCE_MEAN[0] + shift, REFERENCE_STD[0]),
                    gauss(&mut self.rng, REFERENCE_MEAN[1], REFERENCE_STD[1]),
                ]
            })
            .collect();
        Ok(rows)
    }
}

/// Linear decision rule fitted on the reference window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceModel {
    pub weights: [f64; 2],
    pub bias: f64,
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self {
            weights: [0.5, 1.5],
            bias: 100.0,
        }
    }
}

impl ReferenceModel {
    pub fn predict(&self, row: &Row) -> bool {
        self.weights[0] * row[0] + self.weights[1] * row[1] > self.bias
    }
}

fn ground_truth(row: &Row) -> bool {
    row[0] + row[1] > 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftStatus {
    Stable,
    DriftDetected,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftReport {
    pub drift: f64,
    pub accuracy: f64,
    pub status: DriftStatus,
}

impl DriftReport {
    /// Payload reported when the probe faults.
    pub const FAILSAFE: DriftReport = DriftReport {
        drift: 0.0,
        accuracy: 0.0,
        status: DriftStatus::Error,
    };
}

/// Mean of `|live_mean - ref_mean| / ref_std` across features.
pub fn standardized_mean_shift(rows: &[Row]) -> Result<f64> {
    if rows.is_empty() {
        return Err(AegisError::ProbeFailed("live batch is empty".into()));
    }
    let n = rows.len() as f64;
    let mut shift = 0.0;
    for f in 0..2 {
        let mean = rows.iter().map(|r| r[f]).sum::<f64>() / n;
        shift += (mean - REFERENCE_MEAN[f]).abs() / REFERENCE_STD[f];
    }
    let drift = shift / 2.0;
    if !drift.is_finite() {
        return Err(AegisError::ProbeFailed("drift statistic is not finite".into()));
    }
    Ok(drift)
}

fn analyze<S: LiveDataSource + ?Sized>(
    source: &mut S,
    model: &ReferenceModel,
    trigger_drift: bool,
) -> Result<DriftReport> {
    let rows = source.fetch(trigger_drift)?;
    let drift = standardized_mean_shift(&rows)?;

    let hits = rows
        .iter()
        .filter(|r| model.predict(r) == ground_truth(r))
        .count();
    let accuracy = hits as f64 / rows.len() as f64;

    let status = if drift > DRIFT_STATUS_THRESHOLD {
        DriftStatus::DriftDetected
    } else {
        DriftStatus::Stable
    };

    Ok(DriftReport {
        drift: round_to(drift, 3),
        accuracy: round_to(accuracy, 3),
        status,
    })
}

/// Run the probe. Faults are logged and replaced by [`DriftReport::FAILSAFE`].
pub fn probe_drift<S: LiveDataSource + ?Sized>(
    source: &mut S,
    model: &ReferenceModel,
    trigger_drift: bool,
) -> DriftReport {
    analyze(source, model, trigger_drift).unwrap_or_else(|e| {
        tracing::warn!(error = %e, trigger_drift, "drift probe failed; reporting error status");
        DriftReport::FAILSAFE
    })
}
