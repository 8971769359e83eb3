//! LLM serving-metrics synthesizer.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::flags::SimulationFlags;
use crate::sampling::{gauss, offset_uniform, Band};

pub const LATENCY_MS_BAND: Band = Band::new(200.0, 5000.0);
pub const TOKEN_BAND: Band = Band::new(50.0, 4096.0);
pub const HALLUCINATION_BAND: Band = Band::new(0.0, 1.0);
pub const THROUGHPUT_RPM_BAND: Band = Band::new(5.0, 200.0);
pub const CONTEXT_BAND: Band = Band::new(512.0, 8192.0);

/// USD per 1k tokens in the normal and high-cost regimes.
pub const RATE_PER_1K: f64 = 0.025;
pub const HIGH_COST_RATE_PER_1K: f64 = 0.06;

/// One synthetic LLM serving reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmMetrics {
    pub latency_ms: f64,
    pub token_usage: u32,
    pub cost_usd: f64,
    pub hallucination_rate: f64,
    pub safety_flag: bool,
    pub throughput_rpm: f64,
    pub context_length: u32,
    #[serde(serialize_with = "super::serialize_utc")]
    pub timestamp: DateTime<Utc>,
}

/// Synthesize a snapshot.
///
/// Hallucination and safety triggers share one "attack" regime (slow, low
/// throughput, high hallucination rate). The cost trigger only moves token
/// usage and the per-1k rate. `safety_flag` is forced by the safety trigger,
/// otherwise under attack it fires with probability equal to the sampled
/// hallucination rate.
pub fn generate_llm_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    flags: &SimulationFlags,
    at: DateTime<Utc>,
) -> LlmMetrics {
    let attack = flags.attack();
    let high_cost = flags.high_cost();

    let latency_ms = LATENCY_MS_BAND.clamp(if attack {
        gauss(rng, 2200.0, 400.0)
    } else {
        gauss(rng, 680.0, 120.0)
    });

    let raw_tokens = if high_cost {
        gauss(rng, 1800.0, 300.0)
    } else {
        gauss(rng, 420.0, 120.0)
    };
    // Band guarantees [50, 4096], so the cast cannot truncate.
    let token_usage = TOKEN_BAND.clamp(raw_tokens.round()) as u32;

    let rate = if high_cost {
        HIGH_COST_RATE_PER_1K
    } else {
        RATE_PER_1K
    };
    let cost_usd = f64::from(token_usage) / 1000.0 * rate;

    let hallucination_rate = HALLUCINATION_BAND.clamp(if attack {
        offset_uniform(rng, 0.22, 0.25)
    } else {
        offset_uniform(rng, 0.02, 0.05)
    });

    let safety_flag = flags.trigger_safety || (attack && rng.gen::<f64>() < hallucination_rate);

    let rpm_mean = if attack { 28.0 } else { 92.0 };
    let throughput_rpm = THROUGHPUT_RPM_BAND.clamp(gauss(rng, rpm_mean, 12.0));
    let context_length = CONTEXT_BAND.clamp(gauss(rng, 2400.0, 800.0)).round() as u32;

    LlmMetrics {
        latency_ms,
        token_usage,
        cost_usd,
        hallucination_rate,
        safety_flag,
        throughput_rpm,
        context_length,
        timestamp: at,
    }
}
