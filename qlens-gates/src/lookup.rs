//! Gate-kind → matrix resolution and single-qubit application
//!
//! Unknown gate types resolve to the identity — a deliberate leniency so
//! that a circuit containing editor-only annotations (barriers, markers,
//! future gate types) still previews instead of failing.

use crate::matrices::{self, Matrix2};
use crate::rotations;
use num_complex::Complex64;
use qlens_core::{GateKind, GateParams};

/// Resolve a gate family to its 2×2 matrix
///
/// Multi-qubit kinds (CX/CZ/SWAP) also resolve to the identity here: the
/// preview engine special-cases them before consulting this table, and a
/// caller that fails to do so gets a harmless no-op rather than a wrong
/// single-qubit matrix.
pub fn single_qubit_matrix(kind: &GateKind, params: &GateParams) -> Matrix2 {
    match kind {
        GateKind::I => matrices::IDENTITY,
        GateKind::X => matrices::PAULI_X,
        GateKind::Y => matrices::PAULI_Y,
        GateKind::Z => matrices::PAULI_Z,
        GateKind::H => matrices::HADAMARD,
        GateKind::S => matrices::S_GATE,
        GateKind::Sdg => matrices::S_GATE_DAGGER,
        GateKind::Sx => matrices::SX_GATE,
        GateKind::T => matrices::T_GATE,
        GateKind::Tdg => matrices::T_GATE_DAGGER,
        GateKind::Rx => rotations::rx(params.angle_or_zero()),
        GateKind::Ry => rotations::ry(params.angle_or_zero()),
        GateKind::Rz => rotations::rz(params.angle_or_zero()),
        // In the preview model a controlled phase applies its diagonal to
        // the target, so both share the same matrix.
        GateKind::Phase | GateKind::CPhase => rotations::phase(params.angle_or_zero()),
        GateKind::Cx | GateKind::Cz | GateKind::Swap => matrices::IDENTITY,
        GateKind::Unknown(_) => matrices::IDENTITY,
    }
}

/// Apply a 2×2 matrix to an amplitude pair
///
/// `[M00·α + M01·β, M10·α + M11·β]`
#[inline]
pub fn apply_single(m: &Matrix2, amps: [Complex64; 2]) -> [Complex64; 2] {
    [
        m[0][0] * amps[0] + m[0][1] * amps[1],
        m[1][0] * amps[0] + m[1][1] * amps[1],
    ]
}
