//! Top-level facade crate for AegisAI.
//!
//! Re-exports the core synthesis/governance types and the gateway library so
//! users can depend on a single crate.

pub mod core {
    pub use aegis_core::*;
}

pub mod gateway {
    pub use aegis_gateway::*;
}
