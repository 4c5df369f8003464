//! Pearson chi-squared goodness-of-fit test
//!
//! Compares observed shot counts against an expected probability
//! distribution (typically the backend's ideal probabilities).

use crate::distribution::{CountMap, ProbabilityMap};
use crate::numeric::chi_squared_survival;
use serde::Serialize;

/// Result of a chi-squared goodness-of-fit test
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChiSquaredResult {
    /// The χ² statistic, ≥ 0
    pub statistic: f64,
    /// Degrees of freedom: nonzero-expectation categories − 1, floored at 0
    pub dof: usize,
    /// Upper-tail probability; `None` when dof is 0
    pub p_value: Option<f64>,
}

impl ChiSquaredResult {
    /// The degenerate result for distributions with no expected mass
    pub const fn degenerate() -> Self {
        Self {
            statistic: 0.0,
            dof: 0,
            p_value: None,
        }
    }
}

/// Pearson chi-squared test of observed counts against expected
/// probabilities
///
/// - Expected count per state = expected probability × total observed
///   count; only states with nonzero expected probability contribute.
/// - Degrees of freedom = (nonzero-expectation states) − 1, floored at 0.
/// - No expected-probability keys at all yields
///   [`ChiSquaredResult::degenerate`] — an explicit sentinel, not an
///   error.
///
/// # Example
/// ```
/// use qlens_stats::{chi_squared_test, CountMap, ProbabilityMap};
///
/// let mut observed = CountMap::new();
/// observed.insert("0".to_string(), 50);
/// observed.insert("1".to_string(), 50);
/// let mut expected = ProbabilityMap::new();
/// expected.insert("0".to_string(), 0.5);
/// expected.insert("1".to_string(), 0.5);
///
/// let result = chi_squared_test(&observed, &expected);
/// assert!(result.statistic < 1e-12);
/// assert!(result.p_value.unwrap() > 0.5);
/// ```
pub fn chi_squared_test(observed: &CountMap, expected: &ProbabilityMap) -> ChiSquaredResult {
    let categories: Vec<(&String, f64)> = expected
        .iter()
        .filter(|(_, &p)| p > 0.0)
        .map(|(k, &p)| (k, p))
        .collect();
    if categories.is_empty() {
        return ChiSquaredResult::degenerate();
    }

    let total: u64 = observed.values().sum();
    let total = total as f64;

    let mut statistic = 0.0_f64;
    for (key, p) in &categories {
        let expected_count = p * total;
        if expected_count > 0.0 {
            let observed_count = observed.get(*key).copied().unwrap_or(0) as f64;
            let delta = observed_count - expected_count;
            statistic += delta * delta / expected_count;
        }
    }

    let dof = categories.len().saturating_sub(1);
    let p_value = if dof == 0 {
        None
    } else {
        Some(chi_squared_survival(statistic, dof))
    };
    tracing::trace!(statistic, dof, "chi-squared goodness-of-fit");

    ChiSquaredResult {
        statistic,
        dof,
        p_value,
    }
}
