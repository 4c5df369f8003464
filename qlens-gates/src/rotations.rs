//! Parametrized rotation matrices
//!
//! All angles are radians; angle normalization happens upstream in
//! `qlens-core` when the editor's parameter map is read.

use crate::matrices::Matrix2;
use num_complex::Complex64;

/// Rotation about the X axis
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
pub fn rx(theta: f64) -> Matrix2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Y axis
/// RY(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
pub fn ry(theta: f64) -> Matrix2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Z axis
/// RZ(θ) = [[e^(-iθ/2), 0],
///          [0,          e^(iθ/2)]]
pub fn rz(theta: f64) -> Matrix2 {
    let zero = Complex64::new(0.0, 0.0);
    [
        [Complex64::from_polar(1.0, -theta / 2.0), zero],
        [zero, Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

/// Phase gate (U1/P)
/// P(φ) = [[1, 0],
///         [0, e^(iφ)]]
pub fn phase(phi: f64) -> Matrix2 {
    let zero = Complex64::new(0.0, 0.0);
    [
        [Complex64::new(1.0, 0.0), zero],
        [zero, Complex64::from_polar(1.0, phi)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::{IDENTITY, PAULI_X};
    use std::f64::consts::PI;

    fn assert_matrix_eq(a: &Matrix2, b: &Matrix2, eps: f64) {
        for r in 0..2 {
            for c in 0..2 {
                assert!(
                    (a[r][c] - b[r][c]).norm() < eps,
                    "mismatch at ({r},{c}): {:?} vs {:?}",
                    a[r][c],
                    b[r][c]
                );
            }
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        assert_matrix_eq(&rx(0.0), &IDENTITY, 1e-12);
        assert_matrix_eq(&ry(0.0), &IDENTITY, 1e-12);
        assert_matrix_eq(&rz(0.0), &IDENTITY, 1e-12);
        assert_matrix_eq(&phase(0.0), &IDENTITY, 1e-12);
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        // RX(π) = -i·X
        let m = rx(PI);
        let neg_i = Complex64::new(0.0, -1.0);
        for r in 0..2 {
            for c in 0..2 {
                assert!((m[r][c] - neg_i * PAULI_X[r][c]).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn test_ry_half_pi_creates_superposition() {
        // RY(π/2)|0⟩ = (|0⟩ + |1⟩)/√2
        let m = ry(PI / 2.0);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!((m[0][0].re - inv_sqrt2).abs() < 1e-12);
        assert!((m[1][0].re - inv_sqrt2).abs() < 1e-12);
    }

    #[test]
    fn test_phase_leaves_zero_untouched() {
        let m = phase(1.234);
        assert!((m[0][0] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!((m[1][1].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotations_are_unitary() {
        for &theta in &[0.1, 1.0, PI, 2.5 * PI] {
            for m in [rx(theta), ry(theta), rz(theta), phase(theta)] {
                let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
                assert!((det.norm() - 1.0).abs() < 1e-12, "theta={theta}");
            }
        }
    }
}
