//! 2×2 unitary gate matrices for the qlens preview engine
//!
//! The preview engine tracks one amplitude pair per qubit, so every gate
//! it applies directly is a 2×2 matrix acting on `[α, β]`. This crate
//! provides:
//! - [`matrices`]: compile-time constant standard gates
//! - [`rotations`]: parametrized RX/RY/RZ/phase matrices
//! - [`lookup`]: gate-kind → matrix resolution with the identity fallback
//!   for unknown types

pub mod lookup;
pub mod matrices;
pub mod rotations;

pub use lookup::{apply_single, single_qubit_matrix};
pub use matrices::Matrix2;
