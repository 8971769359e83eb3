//! Metric synthesizers (ML model quality + LLM serving).
//!
//! Both synthesizers are pure functions of `(rng, flags, timestamp)`: the
//! flags pick a parameter regime, the RNG drives the noise, and every value is
//! clamped to its [`Band`](crate::sampling::Band) so downstream scoring never
//! sees out-of-range input.

pub mod llm;
pub mod ml;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub use llm::{generate_llm_metrics, LlmMetrics};
pub use ml::{generate_ml_metrics, MlMetrics};

/// ISO-8601 UTC with microseconds and a trailing `Z`.
pub(crate) fn serialize_utc<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Micros, true))
}
