//! Error types for qlens
//!
//! These errors are produced only by the explicit validation entry points
//! (see [`crate::gate::validate`]). The computation paths — evolution,
//! projection, statistics — are total and report degenerate input through
//! documented sentinel values instead.

use thiserror::Error;

/// Errors reported when validating circuit input from the editor
#[derive(Debug, Error)]
pub enum CoreError {
    /// Gate references a qubit outside the register
    #[error("invalid qubit index {qubit}: register has only {num_qubits} qubits")]
    InvalidQubit { qubit: usize, num_qubits: usize },

    /// Register has no qubits
    #[error("register must have at least one qubit")]
    EmptyRegister,

    /// Two-qubit gate is missing its target qubit
    #[error("gate '{gate}' requires targets[0]")]
    MissingTarget { gate: String },
}

impl CoreError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit { qubit, num_qubits }
    }
}
