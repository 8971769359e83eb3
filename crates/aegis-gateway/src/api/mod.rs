//! HTTP API (JSON).
//!
//! - `/api/tick`       : fresh metrics, alert feed, governance verdict
//! - `/api/explain`    : tick plus score breakdown and dashboard badges
//! - `/api/legacy/llm` : simulated chatbot call probe
//! - `/api/legacy/ml`  : batch drift probe

pub mod error;
pub mod legacy;
pub mod query;
pub mod tick;

pub use error::ApiError;
