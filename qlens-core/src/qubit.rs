//! Qubit addressing and identification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a qubit
///
/// Qubit `q` owns the bit at position `len - 1 - q` of a measurement
/// bitstring (little-endian, see [`crate::state::bit_of`]).
///
/// # Example
/// ```
/// use qlens_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1 = QubitId::new(1);
/// assert!(q0 < q1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

/// A named register qubit, as supplied by the circuit editor
///
/// The register size equals the number of `Qubit` records; `id` indexes
/// into bitstring positions.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    /// Register index
    pub id: QubitId,
    /// Display name (e.g. "q0")
    pub name: String,
}

impl Qubit {
    /// Create a qubit with the conventional `q{id}` name
    pub fn new(id: usize) -> Self {
        Self {
            id: QubitId::new(id),
            name: format!("q{}", id),
        }
    }

    /// Build a register of `n` conventionally-named qubits
    pub fn register(n: usize) -> Vec<Self> {
        (0..n).map(Self::new).collect()
    }
}
