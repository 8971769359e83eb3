//! Simulated chatbot call and the LLM call probe built on it.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{AegisError, Result};
use crate::sampling::round_to;

pub const SAFE_RESPONSES: &[&str] = &[
    "Your account balance is ₹12,540.",
    "Your loan application is under review.",
    "Transaction completed successfully.",
    "Your KYC is verified.",
];

pub const UNSAFE_RESPONSES: &[&str] = &[
    "Your password is 123456",
    "Send OTP here to verify",
    "I can bypass bank security",
    "Share your PIN for faster service",
];

/// One answered chatbot call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub latency: Duration,
    pub tokens: u32,
    pub hallucination: bool,
    pub response: &'static str,
}

/// Anything that can answer a chatbot call.
pub trait ChatBackend {
    fn call(&mut self, attack: bool) -> Result<ChatReply>;
}

/// How the simulated "thinking" delay is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Block the thread for the sampled delay and report the measured time.
    RealTime,
    /// Report the sampled delay without sleeping.
    Simulated,
}

/// Canned-response chatbot with a random delay in `[0.3, 2.5)` seconds.
pub struct SimulatedChatbot<R> {
    rng: R,
    pacing: Pacing,
}

impl<R: Rng> SimulatedChatbot<R> {
    pub fn new(rng: R, pacing: Pacing) -> Self {
        Self { rng, pacing }
    }
}

impl<R: Rng> ChatBackend for SimulatedChatbot<R> {
    fn call(&mut self, attack: bool) -> Result<ChatReply> {
        let delay = Duration::from_secs_f64(self.rng.gen_range(0.3..2.5));
        let latency = match self.pacing {
            Pacing::RealTime => {
                let start = Instant::now();
                std::thread::sleep(delay);
                start.elapsed()
            }
            Pacing::Simulated => delay,
        };

        let pool = if attack {
            UNSAFE_RESPONSES
        } else {
            SAFE_RESPONSES
        };
        let response = pool
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| AegisError::ProbeFailed("empty response pool".into()))?;

        Ok(ChatReply {
            latency,
            tokens: self.rng.gen_range(50..=500),
            hallucination: attack,
            response,
        })
    }
}

/// Reduced LLM reading produced by the call probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LlmCallReport {
    /// Seconds, 3 decimals.
    pub latency: f64,
    pub tokens: u32,
    /// 0 or 1.
    pub hallucination: u8,
}

impl LlmCallReport {
    /// Payload reported when the call faults.
    pub const FAILSAFE: LlmCallReport = LlmCallReport {
        latency: 0.0,
        tokens: 0,
        hallucination: 1,
    };
}

/// Make one call and reduce it. Errors and panics in the backend are logged
/// and replaced by [`LlmCallReport::FAILSAFE`].
pub fn probe_llm_call<B: ChatBackend + ?Sized>(backend: &mut B, attack: bool) -> LlmCallReport {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| backend.call(attack)));
    match outcome {
        Ok(Ok(reply)) => {
            tracing::debug!(response = reply.response, attack, "chatbot replied");
            LlmCallReport {
                latency: round_to(reply.latency.as_secs_f64(), 3),
                tokens: reply.tokens,
                hallucination: u8::from(reply.hallucination),
            }
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, attack, "llm call probe failed; reporting failsafe");
            LlmCallReport::FAILSAFE
        }
        Err(_) => {
            tracing::warn!(attack, "llm backend panicked; reporting failsafe");
            LlmCallReport::FAILSAFE
        }
    }
}
