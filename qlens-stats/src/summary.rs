//! Scalar summaries of an outcome distribution

use crate::distribution::ProbabilityMap;
use serde::Serialize;

/// The scalar summary triple consumed by results panels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistributionSummary {
    /// Shannon entropy in bits
    pub entropy: f64,
    /// Probability-weighted mean of the outcome values
    pub mean: f64,
    /// Probability-weighted variance about the mean
    pub variance: f64,
}

/// Shannon entropy in bits: −Σ p·log2(p) over p > 0
///
/// 0 for a single-certainty distribution, 1 for a uniform two-outcome
/// distribution, 0 for an empty map.
pub fn entropy(probs: &ProbabilityMap) -> f64 {
    probs
        .values()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Probability-weighted mean of bitstring keys read as base-2 integers
///
/// Keys that do not parse as binary are skipped. In the common
/// single-qubit case the keys are the literal labels "0" and "1".
pub fn mean(probs: &ProbabilityMap) -> f64 {
    numeric_outcomes(probs).map(|(value, p)| p * value).sum()
}

/// Probability-weighted variance about [`mean`], same value interpretation
pub fn variance(probs: &ProbabilityMap) -> f64 {
    let mu = mean(probs);
    numeric_outcomes(probs)
        .map(|(value, p)| p * (value - mu) * (value - mu))
        .sum()
}

/// Compute all three scalar summaries in one pass over the map
pub fn summarize(probs: &ProbabilityMap) -> DistributionSummary {
    DistributionSummary {
        entropy: entropy(probs),
        mean: mean(probs),
        variance: variance(probs),
    }
}

/// (integer value, probability) pairs for keys that parse as binary
fn numeric_outcomes(probs: &ProbabilityMap) -> impl Iterator<Item = (f64, f64)> + '_ {
    probs
        .iter()
        .filter_map(|(key, &p)| u64::from_str_radix(key, 2).ok().map(|v| (v as f64, p)))
}
