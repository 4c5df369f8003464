//! Sparse multi-qubit state representation
//!
//! An [`AmplitudeMap`] maps measurement bitstrings to complex amplitudes;
//! absent keys carry zero amplitude. This mirrors the shape a remote
//! execution backend returns (`statevector` keyed by bitstring) and is the
//! input to the partial-trace projection in [`crate::trace`].
//!
//! Bit convention is little-endian: qubit `q` owns the character at
//! position `len - 1 - q` of a key. [`bit_of`] is the single owner of that
//! convention — reversing it silently flips correlation and per-qubit
//! probability results, so every consumer must go through it.

use ahash::AHashMap;
use num_complex::Complex64;

/// Sparse bitstring → amplitude map
#[derive(Clone, Debug, Default)]
pub struct AmplitudeMap {
    amplitudes: AHashMap<String, Complex64>,
}

impl AmplitudeMap {
    /// Create an empty map (the zero state, degenerate)
    pub fn new() -> Self {
        Self::default()
    }

    /// The single-key map for the all-|0⟩ state on `n` qubits
    pub fn all_zero(n: usize) -> Self {
        let mut map = Self::new();
        map.insert("0".repeat(n.max(1)), Complex64::new(1.0, 0.0));
        map
    }

    /// Set the amplitude for a basis state
    pub fn insert(&mut self, key: impl Into<String>, amplitude: Complex64) {
        self.amplitudes.insert(key.into(), amplitude);
    }

    /// Amplitude for a basis state; absent keys are zero
    pub fn amplitude(&self, key: &str) -> Complex64 {
        self.amplitudes
            .get(key)
            .copied()
            .unwrap_or(Complex64::new(0.0, 0.0))
    }

    /// Iterate over present (key, amplitude) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, Complex64)> {
        self.amplitudes.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of present entries
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Whether no entries are present
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Register size implied by the longest key
    pub fn num_qubits(&self) -> usize {
        self.amplitudes.keys().map(|k| k.len()).max().unwrap_or(0)
    }

    /// Sum of squared magnitudes over present entries
    ///
    /// ≈ 1 for a normalized state, within floating tolerance.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.values().map(|a| a.norm_sqr()).sum()
    }

    /// Build from backend wire data: bitstring → `[re, im]` pairs
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, [f64; 2])>,
        K: Into<String>,
    {
        let mut map = Self::new();
        for (key, [re, im]) in pairs {
            map.insert(key, Complex64::new(re, im));
        }
        map
    }
}

impl<K: Into<String>> FromIterator<(K, Complex64)> for AmplitudeMap {
    fn from_iter<I: IntoIterator<Item = (K, Complex64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, amp) in iter {
            map.insert(key, amp);
        }
        map
    }
}

/// The bit qubit `q` contributes to bitstring `key` (little-endian)
///
/// Returns `None` when the key is too short to carry that qubit.
///
/// # Example
/// ```
/// use qlens_core::bit_of;
///
/// // qubit 0 is the rightmost character
/// assert_eq!(bit_of("10", 0), Some(false));
/// assert_eq!(bit_of("10", 1), Some(true));
/// assert_eq!(bit_of("10", 2), None);
/// ```
#[inline]
pub fn bit_of(key: &str, qubit: usize) -> Option<bool> {
    let bytes = key.as_bytes();
    if qubit >= bytes.len() {
        return None;
    }
    Some(bytes[bytes.len() - 1 - qubit] == b'1')
}

/// The same bitstring with qubit `q`'s bit flipped
///
/// Returns the key unchanged when it is too short to carry that qubit.
pub fn flip_bit(key: &str, qubit: usize) -> String {
    let mut bytes = key.as_bytes().to_vec();
    if qubit < bytes.len() {
        let pos = bytes.len() - 1 - qubit;
        bytes[pos] = if bytes[pos] == b'1' { b'0' } else { b'1' };
    }
    // Keys are ASCII '0'/'1' by construction
    String::from_utf8(bytes).unwrap_or_else(|_| key.to_string())
}
