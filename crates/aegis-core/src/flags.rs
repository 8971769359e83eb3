//! Simulation flag set supplied by the caller on every tick.

use serde::{Deserialize, Serialize};

/// Four independent toggles, each selecting one of two parameter regimes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationFlags {
    #[serde(default)]
    pub trigger_drift: bool,
    #[serde(default)]
    pub trigger_hallucination: bool,
    #[serde(default)]
    pub trigger_cost: bool,
    #[serde(default)]
    pub trigger_safety: bool,
}

impl SimulationFlags {
    /// Hallucination and safety both put the LLM under "attack".
    pub fn attack(&self) -> bool {
        self.trigger_hallucination || self.trigger_safety
    }

    pub fn high_cost(&self) -> bool {
        self.trigger_cost
    }

    /// All sixteen combinations, in bit order (drift is the low bit).
    pub fn all() -> impl Iterator<Item = SimulationFlags> {
        (0u8..16).map(|bits| SimulationFlags {
            trigger_drift: bits & 0b0001 != 0,
            trigger_hallucination: bits & 0b0010 != 0,
            trigger_cost: bits & 0b0100 != 0,
            trigger_safety: bits & 0b1000 != 0,
        })
    }
}
