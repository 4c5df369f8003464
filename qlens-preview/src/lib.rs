//! Separable-state circuit preview engine
//!
//! This engine tracks one amplitude pair **per qubit** instead of a full
//! 2^N joint vector. That is an explicit separable-state approximation:
//! it cannot represent genuine entanglement, and two-qubit control gates
//! are handled by a classical-control heuristic (see [`engine`]). It
//! exists to drive per-step Bloch-sphere visualization in the circuit
//! editor, not to replace an exact simulator — authoritative execution
//! happens on the remote backend, whose joint state vectors are projected
//! exactly via `qlens_core::reduced_bloch`.
//!
//! # Example
//! ```
//! use qlens_core::{GateSpec, Qubit, StateLabel};
//! use qlens_preview::evolve;
//!
//! let qubits = Qubit::register(1);
//! let gates = vec![GateSpec::single("h", 0, 0)];
//! let steps = evolve(&qubits, &gates);
//!
//! assert_eq!(steps.len(), 2);
//! assert_eq!(steps[1].qubit_states[0].label, StateLabel::Plus);
//! ```

pub mod config;
pub mod engine;
pub mod step;

pub use config::PreviewConfig;
pub use engine::{evolve, evolve_with};
pub use step::{QubitStateView, SimulationStep};
