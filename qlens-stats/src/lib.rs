//! Measurement-outcome statistics for qlens
//!
//! Pure functions over bitstring → probability distributions and aligned
//! shot-count maps, as produced by the local preview or a remote
//! execution backend. Every function is total: degenerate input (empty
//! distributions, zero totals, no expected-probability keys) yields the
//! documented zero/empty/`None` sentinel instead of an error, so result
//! panels can render "not applicable" rather than crash.
//!
//! # Example
//! ```
//! use qlens_stats::{entropy, ProbabilityMap};
//!
//! let mut probs = ProbabilityMap::new();
//! probs.insert("0".to_string(), 0.5);
//! probs.insert("1".to_string(), 0.5);
//! assert!((entropy(&probs) - 1.0).abs() < 1e-12);
//! ```

pub mod chi_squared;
pub mod confidence;
pub mod correlation;
pub mod distribution;
mod numeric;
pub mod summary;

pub use chi_squared::{chi_squared_test, ChiSquaredResult};
pub use confidence::{
    intervals_from_counts, wilson_interval, ConfidenceInterval, DEFAULT_CONFIDENCE,
};
pub use correlation::{qubit_correlations, PairCorrelation, QubitCorrelations};
pub use distribution::{normalize_counts, CountMap, ProbabilityMap};
pub use summary::{entropy, mean, summarize, variance, DistributionSummary};
