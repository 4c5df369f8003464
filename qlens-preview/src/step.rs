//! Per-step visualization records

use qlens_core::{BlochVector, StateLabel};
use serde::Serialize;

/// Display record for one qubit at one step
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QubitStateView {
    /// Register index
    pub qubit: usize,
    /// Bloch-sphere coordinates
    pub bloch: BlochVector,
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
    /// Named ket classification
    pub label: StateLabel,
    /// Formatted ket expansion, e.g. `0.707|0⟩ + 0.707|1⟩`
    pub amplitudes: String,
}

/// One step of the preview history
///
/// Step 0 is the initial all-|0⟩ state; step k+1 reflects all gates at
/// position k. `qubit_states` has exactly one entry per register qubit,
/// in register order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationStep {
    /// Step index
    pub step: usize,
    /// What happened at this step, e.g. `H on q0`
    pub description: String,
    /// Per-qubit display records, in register order
    pub qubit_states: Vec<QubitStateView>,
}
