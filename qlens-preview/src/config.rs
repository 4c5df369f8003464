//! Preview engine configuration
//!
//! Thresholds are explicit named values passed per call rather than
//! module-level mutable state.

/// Configuration for the preview engine
#[derive(Debug, Clone, Copy)]
pub struct PreviewConfig {
    /// Squared-norm floor below which a qubit's pair is treated as |0⟩
    ///
    /// Default: 1e-10
    pub norm_epsilon: f64,

    /// |1⟩-probability above which a classical control fires
    ///
    /// Default: 0.5
    pub control_threshold: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            norm_epsilon: 1e-10,
            control_threshold: 0.5,
        }
    }
}

impl PreviewConfig {
    /// Create a configuration with default thresholds
    pub fn new() -> Self {
        Self::default()
    }
}
