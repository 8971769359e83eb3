//! Legacy probes kept for the older dashboard widgets.
//!
//! Both probes run fallible logic behind a pluggable source and never
//! propagate the fault: on any error they return a fixed, valid payload that
//! reads as an alarm (hallucination flagged, or an `error` status).

pub mod chatbot;
pub mod drift;

pub use chatbot::{probe_llm_call, ChatBackend, ChatReply, LlmCallReport, Pacing, SimulatedChatbot};
pub use drift::{
    probe_drift, DriftReport, DriftStatus, LiveDataSource, ReferenceModel, SyntheticFeed,
};
