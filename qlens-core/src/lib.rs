//! Core types for the qlens circuit preview engine
//!
//! This crate provides the shared vocabulary for the rest of the workspace:
//! - [`QubitId`] / [`Qubit`]: type-safe qubit addressing
//! - [`GateSpec`]: gate operations as supplied by the circuit editor
//! - [`AmplitudeMap`]: sparse bitstring → amplitude state representation
//! - [`BlochVector`]: Bloch-sphere geometry, labeling, and partial trace
//!
//! # Example
//! ```
//! use qlens_core::{BlochVector, Complex64};
//!
//! // |0⟩ points to the north pole
//! let bloch = BlochVector::from_amplitudes(
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//! );
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//! ```

pub mod bloch;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod state;
pub mod trace;

// Re-exports for convenience
pub use bloch::{BlochAngles, BlochVector, StateLabel};
pub use error::CoreError;
pub use gate::{GateKind, GateParams, GateSpec};
pub use num_complex::Complex64;
pub use qubit::{Qubit, QubitId};
pub use state::{bit_of, flip_bit, AmplitudeMap};
pub use trace::{reduced_bloch, sparse_bloch, MAX_TRACE_QUBITS};

/// Type alias for results in qlens
pub type Result<T> = std::result::Result<T, CoreError>;
