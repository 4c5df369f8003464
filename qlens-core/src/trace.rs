//! Partial trace: joint state vector → single-qubit Bloch projection
//!
//! Two projection paths:
//! - [`reduced_bloch`] computes the reduced density matrix of one qubit by
//!   tracing out the rest of the register, then maps it to Bloch
//!   coordinates. This is the exact path and handles mixed (entangled)
//!   reduced states, which land strictly inside the sphere.
//! - [`sparse_bloch`] is the lenient fallback for sparse/partial joint
//!   maps: it folds amplitude mass per target-bit value into an effective
//!   amplitude pair and reuses the pure-state projection.

use crate::bloch::BlochVector;
use crate::state::{bit_of, flip_bit, AmplitudeMap};
use num_complex::Complex64;

/// Registers larger than this are refused, bounding the 2^N basis
pub const MAX_TRACE_QUBITS: usize = 30;

/// Traces below this are treated as degenerate
const TRACE_EPS: f64 = 1e-15;

/// Reduced density matrix of `qubit`, projected to Bloch coordinates
///
/// For every pair of joint-basis states differing only in the target
/// qubit's bit, accumulates
/// `ρ00 += |a(i0)|²`, `ρ11 += |a(i1)|²`, `ρ01 += a(i0)·conj(a(i1))`,
/// then normalizes by the trace and maps
/// `x = 2·Re(ρ01)`, `y = −2·Im(ρ01)`, `z = ρ00 − ρ11`, clamped to [-1, 1].
///
/// Returns `None` for a degenerate trace (≤ 1e-15), an out-of-range qubit
/// index, or a register beyond [`MAX_TRACE_QUBITS`].
///
/// # Example
/// ```
/// use qlens_core::{reduced_bloch, AmplitudeMap, Complex64};
///
/// // Bell state: each qubit's reduced state is maximally mixed
/// let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
/// let state: AmplitudeMap = [
///     ("00", Complex64::new(inv_sqrt2, 0.0)),
///     ("11", Complex64::new(inv_sqrt2, 0.0)),
/// ]
/// .into_iter()
/// .collect();
/// let bloch = reduced_bloch(&state, 0).unwrap();
/// assert!(bloch.magnitude() < 1e-10);
/// ```
pub fn reduced_bloch(state: &AmplitudeMap, qubit: usize) -> Option<BlochVector> {
    let n = state.num_qubits();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(BlochVector::from_amplitudes(
            state.amplitude("0"),
            state.amplitude("1"),
        ));
    }
    if qubit >= n || n > MAX_TRACE_QUBITS {
        return None;
    }

    let mut rho00 = 0.0_f64;
    let mut rho11 = 0.0_f64;
    let mut rho01 = Complex64::new(0.0, 0.0);

    // Only present keys carry amplitude; the partner of a bit-0 key covers
    // the off-diagonal term, so each pair is visited once.
    for (key, amp) in state.iter() {
        match bit_of(key, qubit) {
            Some(false) => {
                rho00 += amp.norm_sqr();
                let partner = flip_bit(key, qubit);
                rho01 += amp * state.amplitude(&partner).conj();
            }
            Some(true) => rho11 += amp.norm_sqr(),
            // Keys too short to carry this qubit contribute nothing.
            None => {}
        }
    }

    let trace = rho00 + rho11;
    if trace <= TRACE_EPS {
        return None;
    }
    let rho01 = rho01 / trace;
    let z = (rho00 - rho11) / trace;

    Some(BlochVector {
        x: (2.0 * rho01.re).clamp(-1.0, 1.0),
        y: (-2.0 * rho01.im).clamp(-1.0, 1.0),
        z: z.clamp(-1.0, 1.0),
    })
}

/// Lenient projection for sparse/partial joint maps
///
/// Sums amplitude contributions per target-bit value into an effective
/// (α, β) pair and delegates to the pure-state projection. All-negligible
/// contributions yield the |0⟩ default.
pub fn sparse_bloch(state: &AmplitudeMap, qubit: usize) -> BlochVector {
    let mut alpha = Complex64::new(0.0, 0.0);
    let mut beta = Complex64::new(0.0, 0.0);
    for (key, amp) in state.iter() {
        match bit_of(key, qubit) {
            Some(false) => alpha += amp,
            Some(true) => beta += amp,
            None => {}
        }
    }
    // from_amplitudes already maps a negligible pair to the |0⟩ default.
    BlochVector::from_amplitudes(alpha, beta)
}
