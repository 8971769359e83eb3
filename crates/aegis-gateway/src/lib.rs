//! AegisAI gateway library entry.
//!
//! Wires the HTTP surface (tick, explain, legacy probes, ops endpoints), the
//! strict YAML config, and the in-process metrics around `aegis-core`. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
