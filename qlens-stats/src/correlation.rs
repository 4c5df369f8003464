//! Pairwise qubit correlation from a joint outcome distribution
//!
//! Each qubit's measurement outcome is encoded as ±1 (|0⟩ → +1,
//! |1⟩ → −1); the reported value per pair is the Pearson correlation of
//! those encodings, in [−1, 1]. Bits are read with the register's
//! little-endian convention via `qlens_core::bit_of`.

use crate::distribution::ProbabilityMap;
use qlens_core::bit_of;
use serde::Serialize;

/// Correlation coefficient for one qubit pair
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairCorrelation {
    /// First qubit index (i < j)
    pub i: usize,
    /// Second qubit index
    pub j: usize,
    /// Display label, e.g. `q0-q1`
    pub pair: String,
    /// Correlation in [−1, 1]
    pub value: f64,
}

/// All pairwise correlations over a register
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QubitCorrelations {
    /// One entry per pair (i, j) with i < j
    pub correlations: Vec<PairCorrelation>,
    /// Register size the correlations were computed over
    pub num_qubits: usize,
}

impl QubitCorrelations {
    /// The sentinel for empty/zero-mass input
    pub fn empty() -> Self {
        Self {
            correlations: Vec::new(),
            num_qubits: 0,
        }
    }
}

/// Pairwise ±1 correlation coefficients from a joint distribution
///
/// A distribution with no probability mass yields
/// [`QubitCorrelations::empty`] (`num_qubits` reported as 0) — the
/// explicit degenerate sentinel. A pair where either marginal has zero
/// variance (the bit is deterministic) reports 0 for that pair.
///
/// # Example
/// ```
/// use qlens_stats::{qubit_correlations, ProbabilityMap};
///
/// let mut probs = ProbabilityMap::new();
/// probs.insert("00".to_string(), 0.5);
/// probs.insert("11".to_string(), 0.5);
///
/// let result = qubit_correlations(&probs, 2);
/// assert_eq!(result.correlations[0].pair, "q0-q1");
/// assert!((result.correlations[0].value - 1.0).abs() < 1e-9);
/// ```
pub fn qubit_correlations(probs: &ProbabilityMap, num_qubits: usize) -> QubitCorrelations {
    let total: f64 = probs.values().filter(|p| p.is_finite()).sum();
    if total <= 0.0 || num_qubits == 0 {
        return QubitCorrelations::empty();
    }
    tracing::trace!(num_qubits, outcomes = probs.len(), "pairwise correlations");

    // ±1 encoding: an absent bit (key shorter than the register) reads
    // as 0, i.e. +1.
    let sign = |key: &str, qubit: usize| -> f64 {
        if bit_of(key, qubit).unwrap_or(false) {
            -1.0
        } else {
            1.0
        }
    };

    let mut correlations = Vec::with_capacity(num_qubits * (num_qubits - 1) / 2);
    for i in 0..num_qubits {
        for j in (i + 1)..num_qubits {
            let mut e_i = 0.0;
            let mut e_j = 0.0;
            let mut e_ij = 0.0;
            for (key, &p) in probs.iter() {
                if !(p.is_finite() && p > 0.0) {
                    continue;
                }
                let w = p / total;
                let zi = sign(key, i);
                let zj = sign(key, j);
                e_i += w * zi;
                e_j += w * zj;
                e_ij += w * zi * zj;
            }
            // z² = 1, so Var(z) = 1 − E[z]²
            let var_i = (1.0 - e_i * e_i).max(0.0);
            let var_j = (1.0 - e_j * e_j).max(0.0);
            let denom = (var_i * var_j).sqrt();
            let value = if denom < 1e-12 {
                0.0
            } else {
                ((e_ij - e_i * e_j) / denom).clamp(-1.0, 1.0)
            };
            correlations.push(PairCorrelation {
                i,
                j,
                pair: format!("q{i}-q{j}"),
                value,
            });
        }
    }

    QubitCorrelations {
        correlations,
        num_qubits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probs(pairs: &[(&str, f64)]) -> ProbabilityMap {
        pairs.iter().map(|(k, p)| (k.to_string(), *p)).collect()
    }

    #[test]
    fn test_bell_state_perfectly_correlated() {
        let result = qubit_correlations(&probs(&[("00", 0.5), ("11", 0.5)]), 2);
        assert_eq!(result.num_qubits, 2);
        assert_eq!(result.correlations.len(), 1);
        let pair = &result.correlations[0];
        assert_eq!((pair.i, pair.j), (0, 1));
        assert_eq!(pair.pair, "q0-q1");
        assert!((pair.value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_anticorrelated_pair() {
        let result = qubit_correlations(&probs(&[("01", 0.5), ("10", 0.5)]), 2);
        assert!((result.correlations[0].value + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_independent_qubits_uncorrelated() {
        let uniform = probs(&[("00", 0.25), ("01", 0.25), ("10", 0.25), ("11", 0.25)]);
        let result = qubit_correlations(&uniform, 2);
        assert!(result.correlations[0].value.abs() < 1e-9);
    }

    #[test]
    fn test_deterministic_bit_reports_zero() {
        // Qubit 1 is always 0: zero marginal variance
        let result = qubit_correlations(&probs(&[("00", 0.5), ("01", 0.5)]), 2);
        assert_eq!(result.correlations[0].value, 0.0);
    }

    #[test]
    fn test_empty_distribution_sentinel() {
        let result = qubit_correlations(&ProbabilityMap::new(), 2);
        assert_eq!(result, QubitCorrelations::empty());
        assert!(result.correlations.is_empty());
        assert_eq!(result.num_qubits, 0);
    }

    #[test]
    fn test_zero_mass_distribution_sentinel() {
        let result = qubit_correlations(&probs(&[("00", 0.0)]), 2);
        assert_eq!(result, QubitCorrelations::empty());
    }

    #[test]
    fn test_three_qubit_pair_count() {
        let ghz = probs(&[("000", 0.5), ("111", 0.5)]);
        let result = qubit_correlations(&ghz, 3);
        assert_eq!(result.correlations.len(), 3);
        for pair in &result.correlations {
            assert!((pair.value - 1.0).abs() < 1e-9, "{}", pair.pair);
        }
    }

    #[test]
    fn test_unnormalized_mass_is_renormalized() {
        // Same shape as the Bell case but summing to 2
        let result = qubit_correlations(&probs(&[("00", 1.0), ("11", 1.0)]), 2);
        assert!((result.correlations[0].value - 1.0).abs() < 1e-9);
    }
}
