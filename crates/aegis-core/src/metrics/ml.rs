//! ML model-quality synthesizer.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::flags::SimulationFlags;
use crate::sampling::{gauss, offset_uniform, Band};

pub const ACCURACY_BAND: Band = Band::new(0.6, 0.999);
pub const PRECISION_BAND: Band = Band::new(0.6, 0.999);
pub const RECALL_BAND: Band = Band::new(0.6, 0.999);
pub const DRIFT_BAND: Band = Band::new(0.0, 1.0);
pub const BIAS_BAND: Band = Band::new(0.0, 1.0);
pub const LATENCY_MS_BAND: Band = Band::new(30.0, 500.0);
pub const THROUGHPUT_BAND: Band = Band::new(100.0, 1200.0);

/// One synthetic model-quality reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub drift_score: f64,
    pub bias_score: f64,
    pub latency_ms: f64,
    pub throughput: f64,
    #[serde(serialize_with = "super::serialize_utc")]
    pub timestamp: DateTime<Utc>,
}

/// Mean/stddev pair for one regime.
struct Regime {
    mean: f64,
    std: f64,
}

fn pick(on: bool, when_on: (f64, f64), when_off: (f64, f64)) -> Regime {
    let (mean, std) = if on { when_on } else { when_off };
    Regime { mean, std }
}

/// Synthesize a snapshot. Drift lowers the quality means, widens their spread,
/// and pushes the drift score into the `[0.45, 0.85)` range.
pub fn generate_ml_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    flags: &SimulationFlags,
    at: DateTime<Utc>,
) -> MlMetrics {
    let drift = flags.trigger_drift;

    let acc = pick(drift, (0.77, 0.04), (0.926, 0.008));
    let prec = pick(drift, (0.74, 0.05), (0.908, 0.01));
    let rec = pick(drift, (0.73, 0.05), (0.893, 0.01));

    let accuracy = ACCURACY_BAND.clamp(gauss(rng, acc.mean, acc.std));
    let precision = PRECISION_BAND.clamp(gauss(rng, prec.mean, prec.std));
    let recall = RECALL_BAND.clamp(gauss(rng, rec.mean, rec.std));
    let f1 = f1_score(precision, recall);

    let drift_score = DRIFT_BAND.clamp(if drift {
        offset_uniform(rng, 0.45, 0.4)
    } else {
        offset_uniform(rng, 0.08, 0.12)
    });
    let bias_score = BIAS_BAND.clamp(offset_uniform(rng, 0.04, 0.12));

    let lat = pick(drift, (210.0, 40.0), (82.0, 15.0));
    let latency_ms = LATENCY_MS_BAND.clamp(gauss(rng, lat.mean, lat.std));
    let throughput_mean = if drift { 320.0 } else { 780.0 };
    let throughput = THROUGHPUT_BAND.clamp(gauss(rng, throughput_mean, 60.0));

    MlMetrics {
        accuracy,
        precision,
        recall,
        f1,
        drift_score,
        bias_score,
        latency_ms,
        throughput,
        timestamp: at,
    }
}

/// Harmonic mean of precision and recall; 0 when both are 0.
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    let sum = precision + recall;
    if sum == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / sum
}
