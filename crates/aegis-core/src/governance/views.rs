//! Reduced views the scorer consumes.
//!
//! These are a parallel, narrower representation of the snapshots (latency in
//! seconds, hallucination as 0/1), not a subset of their fields.

use serde::{Deserialize, Serialize};

use crate::metrics::{LlmMetrics, MlMetrics};

/// Hallucination rate above which the LLM view reports a hallucination.
pub const HALLUCINATION_RATE_CUTOFF: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GovMlView {
    pub drift: f64,
    pub accuracy: f64,
}

impl Default for GovMlView {
    /// A missing ML reading counts as no drift and perfect accuracy.
    fn default() -> Self {
        Self {
            drift: 0.0,
            accuracy: 1.0,
        }
    }
}

impl GovMlView {
    pub fn from_snapshot(ml: &MlMetrics) -> Self {
        Self {
            drift: ml.drift_score,
            accuracy: ml.accuracy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GovLlmView {
    /// Seconds.
    pub latency: f64,
    pub tokens: u32,
    /// 0 or 1.
    pub hallucination: u8,
}

impl GovLlmView {
    /// Project the snapshots into the scorer's LLM view.
    ///
    /// Latency is the ML snapshot's `latency_ms` converted to seconds, not the
    /// LLM snapshot's latency.
    pub fn project(ml: &MlMetrics, llm: &LlmMetrics) -> Self {
        let hallucinating = llm.hallucination_rate > HALLUCINATION_RATE_CUTOFF || llm.safety_flag;
        Self {
            latency: ml.latency_ms / 1000.0,
            tokens: llm.token_usage,
            hallucination: u8::from(hallucinating),
        }
    }
}
