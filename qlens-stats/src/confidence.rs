//! Wilson score confidence intervals for outcome proportions
//!
//! The Wilson interval stays inside [0, 1] and behaves well at small and
//! zero counts, unlike the naive normal approximation.

use crate::distribution::CountMap;
use crate::numeric::z_score;
use ahash::AHashMap;
use serde::Serialize;

/// Default confidence level for result panels
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// A confidence interval with `0 ≤ lower ≤ upper ≤ 1`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

/// Wilson score interval for a binomial proportion
///
/// `total == 0` yields the maximally-uninformative `[0, 1]` sentinel
/// rather than an error. For `0 < successes < total` the interval is
/// strictly wider than a point and contains the observed proportion.
///
/// # Example
/// ```
/// use qlens_stats::{wilson_interval, DEFAULT_CONFIDENCE};
///
/// let ci = wilson_interval(50, 100, DEFAULT_CONFIDENCE);
/// assert!(ci.lower < 0.5 && 0.5 < ci.upper);
/// ```
pub fn wilson_interval(successes: u64, total: u64, confidence: f64) -> ConfidenceInterval {
    if total == 0 {
        return ConfidenceInterval {
            lower: 0.0,
            upper: 1.0,
        };
    }

    let n = total as f64;
    let p_hat = (successes.min(total)) as f64 / n;
    let z = z_score(confidence);
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let centre = (p_hat + z2 / (2.0 * n)) / denom;
    let half_width = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt() / denom;

    ConfidenceInterval {
        lower: (centre - half_width).max(0.0),
        upper: (centre + half_width).min(1.0),
    }
}

/// Wilson interval per bitstring key of a count map
///
/// `total` is the shot count the proportions are measured against —
/// normally the sum of the counts, passed explicitly so that partial
/// count maps still produce correct per-state intervals.
pub fn intervals_from_counts(
    counts: &CountMap,
    total: u64,
) -> AHashMap<String, ConfidenceInterval> {
    counts
        .iter()
        .map(|(key, &c)| (key.clone(), wilson_interval(c, total, DEFAULT_CONFIDENCE)))
        .collect()
}
