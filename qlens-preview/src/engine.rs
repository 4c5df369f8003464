//! Gate-by-gate evolution of per-qubit amplitude pairs
//!
//! Known limitation, by contract: two-qubit control gates use a
//! classical-control approximation — the control qubit's own |1⟩
//! probability is read, and if it exceeds the configured threshold the
//! target's matrix is applied unconditionally. This cannot represent true
//! entanglement. SWAP exchanges the two amplitude pairs, which is exact
//! for separable states.

use num_complex::Complex64;
use qlens_core::bloch::format_amplitudes;
use qlens_core::{BlochVector, GateKind, GateSpec, Qubit};
use qlens_gates::{apply_single, single_qubit_matrix};

use crate::config::PreviewConfig;
use crate::step::{QubitStateView, SimulationStep};

/// One qubit's independent amplitude pair [α, β]
type Pair = [Complex64; 2];

/// Evolve a circuit with default thresholds
///
/// See [`evolve_with`].
pub fn evolve(qubits: &[Qubit], gates: &[GateSpec]) -> Vec<SimulationStep> {
    evolve_with(&PreviewConfig::default(), qubits, gates)
}

/// Evolve a circuit into a per-step preview history
///
/// - Every qubit starts independently in |0⟩.
/// - Total step count is (maximum gate position + 2): an initial step plus
///   one step per position up to the last occupied one, including gaps.
/// - Step s > 0 applies the gates at position s−1, in list order.
/// - A step with no due gates re-derives display fields from the unchanged
///   pairs without touching the amplitudes, so floating-point drift cannot
///   accumulate across idle steps.
/// - Gates referencing qubits outside the register are skipped; unknown
///   gate types apply the identity. Neither is an error — run
///   [`qlens_core::gate::validate`] first to reject such circuits up
///   front.
///
/// The output is deterministic: the same input yields bit-identical steps.
pub fn evolve_with(
    cfg: &PreviewConfig,
    qubits: &[Qubit],
    gates: &[GateSpec],
) -> Vec<SimulationStep> {
    let total_steps = match gates.iter().map(|g| g.position).max() {
        Some(max_pos) => max_pos + 2,
        None => 1,
    };
    tracing::debug!(
        qubits = qubits.len(),
        gates = gates.len(),
        steps = total_steps,
        "evolving circuit preview"
    );

    let mut pairs: Vec<Pair> = qubits
        .iter()
        .map(|_| [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)])
        .collect();

    let mut steps = Vec::with_capacity(total_steps);
    steps.push(SimulationStep {
        step: 0,
        description: "Initial state".to_string(),
        qubit_states: derive_views(qubits, &pairs),
    });

    for step in 1..total_steps {
        let mut applied: Vec<String> = Vec::new();
        for gate in gates.iter().filter(|g| g.position == step - 1) {
            if let Some(text) = apply_gate(cfg, &mut pairs, gate) {
                applied.push(text);
            }
        }
        let description = if applied.is_empty() {
            // Idle step: the pairs are untouched, display is re-derived.
            "No operation".to_string()
        } else {
            applied.join(", ")
        };
        steps.push(SimulationStep {
            step,
            description,
            qubit_states: derive_views(qubits, &pairs),
        });
    }

    steps
}

/// Apply one gate, returning its description, or `None` if it was skipped
fn apply_gate(cfg: &PreviewConfig, pairs: &mut [Pair], gate: &GateSpec) -> Option<String> {
    let kind = gate.kind();
    match kind {
        GateKind::Cx => {
            let (control, target) = control_target(pairs.len(), gate)?;
            if excited(cfg, &pairs[control]) {
                let m = single_qubit_matrix(&GateKind::X, &gate.params());
                pairs[target] = apply_single(&m, pairs[target]);
            }
            Some(format!("CX q{control}→q{target}"))
        }
        GateKind::Cz => {
            let (control, target) = control_target(pairs.len(), gate)?;
            if excited(cfg, &pairs[control]) {
                let m = single_qubit_matrix(&GateKind::Z, &gate.params());
                pairs[target] = apply_single(&m, pairs[target]);
            }
            Some(format!("CZ q{control}→q{target}"))
        }
        GateKind::CPhase if gate.target().is_some() => {
            let (control, target) = control_target(pairs.len(), gate)?;
            if excited(cfg, &pairs[control]) {
                let m = single_qubit_matrix(&GateKind::Phase, &gate.params());
                pairs[target] = apply_single(&m, pairs[target]);
            }
            Some(format!("CP q{control}→q{target}"))
        }
        GateKind::Swap => {
            let (a, b) = control_target(pairs.len(), gate)?;
            if a != b {
                pairs.swap(a, b);
            }
            Some(format!("SWAP q{a}↔q{b}"))
        }
        _ => {
            let qubit = gate.qubit;
            if qubit >= pairs.len() {
                return None;
            }
            let m = single_qubit_matrix(&kind, &gate.params());
            pairs[qubit] = apply_single(&m, pairs[qubit]);
            Some(format!("{kind} on q{qubit}"))
        }
    }
}

/// Resolve and bounds-check a two-qubit gate's (control, target)
fn control_target(num_qubits: usize, gate: &GateSpec) -> Option<(usize, usize)> {
    let control = gate.qubit;
    let target = gate.target()?;
    if control >= num_qubits || target >= num_qubits {
        return None;
    }
    Some((control, target))
}

/// Classical-control read: does this pair's |1⟩ probability clear the bar?
fn excited(cfg: &PreviewConfig, pair: &Pair) -> bool {
    let norm_sqr = pair[0].norm_sqr() + pair[1].norm_sqr();
    if norm_sqr < cfg.norm_epsilon {
        return false;
    }
    pair[1].norm_sqr() / norm_sqr > cfg.control_threshold
}

/// Derive display records for every register qubit, in register order
fn derive_views(qubits: &[Qubit], pairs: &[Pair]) -> Vec<QubitStateView> {
    qubits
        .iter()
        .map(|q| {
            let idx = q.id.index();
            let pair = pairs
                .get(idx)
                .copied()
                .unwrap_or([Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]);
            let bloch = BlochVector::from_amplitudes(pair[0], pair[1]);
            let angles = bloch.to_angles();
            QubitStateView {
                qubit: idx,
                bloch,
                theta: angles.theta,
                phi: angles.phi,
                label: bloch.label(),
                amplitudes: format_amplitudes(pair[0], pair[1]),
            }
        })
        .collect()
}
