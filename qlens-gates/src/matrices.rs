//! Compile-time constant gate matrices
//!
//! Row-major 2×2 matrices acting on `[amplitude(|0⟩), amplitude(|1⟩)]`.

use num_complex::Complex64;

/// Row-major 2×2 complex matrix
pub type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = 0.7071067811865476; // 1/√2

/// Identity
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (NOT)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S (phase) gate
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// S† gate
/// S† = [[1,  0],
///       [0, -i]]
pub const S_GATE_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, NEG_I]];

/// √X gate
/// SX = 1/2 * [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SX_GATE: Matrix2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

/// T gate
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: Matrix2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)]];

/// T† gate
/// T† = [[1, 0],
///       [0, e^(-iπ/4)]]
pub const T_GATE_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)]];
