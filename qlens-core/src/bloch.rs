//! Bloch sphere geometry for single-qubit states
//!
//! Any pure single-qubit state can be written as
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩ with θ ∈ [0, π], φ ∈ [0, 2π).
//! This module converts amplitude pairs into Bloch coordinates with
//! explicit guards at every trigonometric/ratio step: domain clamping
//! before `acos`, NaN replacement with the |0⟩ default, and a zero-norm
//! sentinel. Those guards are part of the contract, not polish — the
//! preview engine feeds amplitude pairs that drift away from unit norm
//! across many gate applications.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Below this squared norm an amplitude pair is treated as the |0⟩ default
pub const ZERO_NORM_EPS: f64 = 1e-10;

/// Coordinate slack used when classifying a vector into a named ket
pub const LABEL_EPS: f64 = 1e-3;

/// |z| threshold for the |0⟩ / |1⟩ poles
const POLE_THRESHOLD: f64 = 1.0 - LABEL_EPS;

/// Axis threshold for the four equatorial kets
const AXIS_THRESHOLD: f64 = 0.8;

/// A point on (or inside) the Bloch sphere in Cartesian coordinates
///
/// Invariant: `x² + y² + z² ≤ 1` — equality for pure single-qubit states,
/// strictly less when the qubit is entangled with others (the reduced
/// state is mixed).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The |0⟩ default returned for degenerate input
    pub const fn default_zero_ket() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Project an explicit amplitude pair onto the Bloch sphere
    ///
    /// The pair need not be normalized; it is renormalized internally.
    /// A pair with squared norm below [`ZERO_NORM_EPS`] maps to the |0⟩
    /// default, and any NaN produced downstream is replaced with the
    /// matching default component.
    ///
    /// # Example
    /// ```
    /// use qlens_core::{BlochVector, Complex64};
    ///
    /// let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
    /// let bloch = BlochVector::from_amplitudes(
    ///     Complex64::new(inv_sqrt2, 0.0),
    ///     Complex64::new(inv_sqrt2, 0.0),
    /// );
    /// assert!((bloch.x - 1.0).abs() < 1e-10);
    /// ```
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Self {
        let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
        if norm_sqr < ZERO_NORM_EPS {
            return Self::default_zero_ket();
        }

        // Clamp before the square root: floating overshoot past 1.0 would
        // make acos return NaN.
        let p0 = (alpha.norm_sqr() / norm_sqr).clamp(0.0, 1.0);
        let theta = 2.0 * p0.sqrt().acos();

        // φ is β's phase with α's global phase removed.
        let phi = if beta.norm_sqr() < ZERO_NORM_EPS {
            0.0
        } else {
            let corrected = if alpha.norm_sqr() < ZERO_NORM_EPS {
                beta
            } else {
                beta * alpha.conj() / alpha.norm()
            };
            let raw = corrected.im.atan2(corrected.re);
            if raw < 0.0 {
                raw + 2.0 * PI
            } else {
                raw
            }
        };

        let x = theta.sin() * phi.cos();
        let y = theta.sin() * phi.sin();
        let z = theta.cos();

        Self {
            x: if x.is_nan() { 0.0 } else { x },
            y: if y.is_nan() { 0.0 } else { y },
            z: if z.is_nan() { 1.0 } else { z },
        }
    }

    /// Convert to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();
        if r < ZERO_NORM_EPS {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }
        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };
        BlochAngles { theta, phi }
    }

    /// Magnitude of the vector: 1 for pure states, below 1 for mixed
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether this represents a pure state (magnitude ≈ 1)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// All components clamped into [-1, 1]
    pub fn clamped(&self) -> Self {
        Self {
            x: self.x.clamp(-1.0, 1.0),
            y: self.y.clamp(-1.0, 1.0),
            z: self.z.clamp(-1.0, 1.0),
        }
    }

    /// Classify into a named ket for display
    pub fn label(&self) -> StateLabel {
        StateLabel::classify(self)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates to a Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }

    /// Convert to amplitude pair [α, β] where |ψ⟩ = α|0⟩ + β|1⟩
    pub fn to_amplitudes(&self) -> [Complex64; 2] {
        let alpha = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let beta = Complex64::new(
            (self.theta / 2.0).sin() * self.phi.cos(),
            (self.theta / 2.0).sin() * self.phi.sin(),
        );
        [alpha, beta]
    }
}

/// Human-readable classification of a single-qubit state
///
/// A presentation convenience: ambiguous states default to
/// [`StateLabel::Superposition`] rather than guessing a ket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateLabel {
    /// |0⟩ — north pole
    Zero,
    /// |1⟩ — south pole
    One,
    /// |+⟩ — +X axis
    Plus,
    /// |−⟩ — −X axis
    Minus,
    /// |+i⟩ — +Y axis
    PlusI,
    /// |−i⟩ — −Y axis
    MinusI,
    /// Anything else
    Superposition,
}

impl StateLabel {
    /// Classify a (clamped) Bloch vector
    ///
    /// Pole checks use `1 - LABEL_EPS` on z; equatorial axes use a looser
    /// 0.8 threshold since rotation endpoints rarely land exactly on an
    /// axis after repeated gate applications.
    pub fn classify(v: &BlochVector) -> Self {
        let v = v.clamped();
        if v.z >= POLE_THRESHOLD {
            Self::Zero
        } else if v.z <= -POLE_THRESHOLD {
            Self::One
        } else if v.x >= AXIS_THRESHOLD {
            Self::Plus
        } else if v.x <= -AXIS_THRESHOLD {
            Self::Minus
        } else if v.y >= AXIS_THRESHOLD {
            Self::PlusI
        } else if v.y <= -AXIS_THRESHOLD {
            Self::MinusI
        } else {
            Self::Superposition
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Zero => "|0⟩",
            Self::One => "|1⟩",
            Self::Plus => "|+⟩",
            Self::Minus => "|−⟩",
            Self::PlusI => "|+i⟩",
            Self::MinusI => "|−i⟩",
            Self::Superposition => "Superposition",
        };
        write!(f, "{}", text)
    }
}

/// Format an amplitude pair as a ket expansion, e.g. `0.707|0⟩ + 0.707|1⟩`
pub fn format_amplitudes(alpha: Complex64, beta: Complex64) -> String {
    format!(
        "{}|0⟩ + {}|1⟩",
        format_complex(alpha),
        format_complex(beta)
    )
}

/// Fixed-precision complex rendering: `0.707`, `0.707i`, `(0.500+0.500i)`
fn format_complex(c: Complex64) -> String {
    let re_small = c.re.abs() < 5e-4;
    let im_small = c.im.abs() < 5e-4;
    match (re_small, im_small) {
        (_, true) => format!("{:.3}", c.re),
        (true, false) => format!("{:.3}i", c.im),
        (false, false) => {
            let sign = if c.im < 0.0 { "-" } else { "+" };
            format!("({:.3}{}{:.3}i)", c.re, sign, c.im.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_zero_state() {
        let bloch = BlochVector::from_amplitudes(c(1.0, 0.0), c(0.0, 0.0));
        assert_abs_diff_eq!(bloch.x, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(bloch.y, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(bloch.z, 1.0, epsilon = 1e-10);
        assert_eq!(bloch.label(), StateLabel::Zero);
    }

    #[test]
    fn test_one_state() {
        let bloch = BlochVector::from_amplitudes(c(0.0, 0.0), c(1.0, 0.0));
        assert_abs_diff_eq!(bloch.z, -1.0, epsilon = 1e-10);
        assert_eq!(bloch.label(), StateLabel::One);
    }

    #[test]
    fn test_plus_state() {
        let bloch = BlochVector::from_amplitudes(c(INV_SQRT2, 0.0), c(INV_SQRT2, 0.0));
        assert_abs_diff_eq!(bloch.x, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(bloch.z, 0.0, epsilon = 1e-10);
        assert_eq!(bloch.label(), StateLabel::Plus);
    }

    #[test]
    fn test_minus_state() {
        let bloch = BlochVector::from_amplitudes(c(INV_SQRT2, 0.0), c(-INV_SQRT2, 0.0));
        assert_abs_diff_eq!(bloch.x, -1.0, epsilon = 1e-10);
        assert_eq!(bloch.label(), StateLabel::Minus);
    }

    #[test]
    fn test_plus_i_state() {
        let bloch = BlochVector::from_amplitudes(c(INV_SQRT2, 0.0), c(0.0, INV_SQRT2));
        assert_abs_diff_eq!(bloch.y, 1.0, epsilon = 1e-10);
        assert_eq!(bloch.label(), StateLabel::PlusI);
    }

    #[test]
    fn test_global_phase_removed() {
        // e^(iπ/4)·(|0⟩+|1⟩)/√2 is still |+⟩
        let phase = Complex64::from_polar(1.0, PI / 4.0);
        let bloch =
            BlochVector::from_amplitudes(phase * c(INV_SQRT2, 0.0), phase * c(INV_SQRT2, 0.0));
        assert_abs_diff_eq!(bloch.x, 1.0, epsilon = 1e-10);
        assert_eq!(bloch.label(), StateLabel::Plus);
    }

    #[test]
    fn test_zero_norm_defaults_to_zero_ket() {
        let bloch = BlochVector::from_amplitudes(c(0.0, 0.0), c(0.0, 0.0));
        assert_eq!(bloch, BlochVector::default_zero_ket());
        assert_eq!(bloch.label(), StateLabel::Zero);
    }

    #[test]
    fn test_unnormalized_pair_is_renormalized() {
        // 2·|+⟩ projects identically to |+⟩
        let bloch = BlochVector::from_amplitudes(c(2.0 * INV_SQRT2, 0.0), c(2.0 * INV_SQRT2, 0.0));
        assert_abs_diff_eq!(bloch.x, 1.0, epsilon = 1e-10);
        assert!(bloch.is_pure(1e-9));
    }

    #[test]
    fn test_unit_magnitude_property() {
        // Sweep a grid of normalized pairs; output must land on the sphere.
        for i in 0..16 {
            for j in 0..16 {
                let theta = PI * (i as f64) / 15.0;
                let phi = 2.0 * PI * (j as f64) / 16.0;
                let alpha = c((theta / 2.0).cos(), 0.0);
                let beta = Complex64::from_polar((theta / 2.0).sin(), phi);
                let bloch = BlochVector::from_amplitudes(alpha, beta);
                assert!(
                    (bloch.magnitude() - 1.0).abs() < 1e-6,
                    "off-sphere at theta={theta}, phi={phi}: {bloch}"
                );
            }
        }
    }

    #[test]
    fn test_angles_round_trip() {
        let angles = BlochAngles {
            theta: PI / 3.0,
            phi: PI / 5.0,
        };
        let [alpha, beta] = angles.to_amplitudes();
        let bloch = BlochVector::from_amplitudes(alpha, beta);
        let back = bloch.to_angles();
        assert_abs_diff_eq!(back.theta, angles.theta, epsilon = 1e-9);
        assert_abs_diff_eq!(back.phi, angles.phi, epsilon = 1e-9);
    }

    #[test]
    fn test_ambiguous_state_is_superposition() {
        // θ = π/4 sits between pole and equator
        let bloch = BlochVector::from_amplitudes(c((PI / 8.0).cos(), 0.0), c((PI / 8.0).sin(), 0.0));
        assert_eq!(bloch.label(), StateLabel::Superposition);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(format!("{}", StateLabel::Minus), "|−⟩");
        assert_eq!(format!("{}", StateLabel::Superposition), "Superposition");
    }

    #[test]
    fn test_format_amplitudes() {
        let text = format_amplitudes(c(INV_SQRT2, 0.0), c(0.0, INV_SQRT2));
        assert_eq!(text, "0.707|0⟩ + 0.707i|1⟩");
    }
}
