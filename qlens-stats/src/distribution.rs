//! Distribution container types
//!
//! Bitstring keys follow the register's little-endian convention (qubit 0
//! is the rightmost character), shared with `qlens_core::bit_of`.

use ahash::AHashMap;

/// Bitstring → probability; expected to sum to ≈ 1 for a full distribution
pub type ProbabilityMap = AHashMap<String, f64>;

/// Bitstring → integer shot count
pub type CountMap = AHashMap<String, u64>;

/// Normalize shot counts into a probability map
///
/// A zero total yields an all-zero map over the same keys — the degenerate
/// sentinel, not an error.
pub fn normalize_counts(counts: &CountMap) -> ProbabilityMap {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return counts.keys().map(|k| (k.clone(), 0.0)).collect();
    }
    let total = total as f64;
    counts
        .iter()
        .map(|(k, &v)| (k.clone(), v as f64 / total))
        .collect()
}
