//! AegisAI core: metric synthesis, governance scoring, and alert derivation.
//!
//! Everything here is synchronous and stateless. Callers supply a
//! [`SimulationFlags`] set, an RNG, and a timestamp; the crate returns plain
//! serializable snapshots. There is no transport or runtime dependency so the
//! same pipeline backs the HTTP gateway and the tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Fallible paths (the legacy probes) surface as `AegisError`/`Result` and are
//! folded into their documented fallback payloads instead of crashing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod alerts;
pub mod error;
pub mod flags;
pub mod governance;
pub mod legacy;
pub mod metrics;
pub mod sampling;
pub mod status;
pub mod tick;

/// Shared result type.
pub use error::{AegisError, Result};
pub use flags::SimulationFlags;
pub use tick::{run_explained_tick, run_tick, ExplainedTick, TickReport};
