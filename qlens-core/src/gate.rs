//! Gate specifications as supplied by the circuit editor
//!
//! The editor sends gates as loosely-typed JSON records. [`GateSpec`]
//! mirrors that wire shape; [`GateKind`] and [`GateParams`] normalize it
//! into a closed, typed form immediately after deserialization. Unknown
//! gate type strings survive parsing as [`GateKind::Unknown`] and are
//! treated as the identity downstream — callers must never assume every
//! type string is known.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;

/// The closed set of gate families the preview engine understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateKind {
    /// Identity
    I,
    /// Pauli-X (NOT)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// Hadamard
    H,
    /// S (phase) gate
    S,
    /// S† gate
    Sdg,
    /// √X gate
    Sx,
    /// T gate
    T,
    /// T† gate
    Tdg,
    /// Rotation about X
    Rx,
    /// Rotation about Y
    Ry,
    /// Rotation about Z
    Rz,
    /// Phase rotation (U1 / P gate)
    Phase,
    /// Controlled phase rotation
    CPhase,
    /// Controlled-X
    Cx,
    /// Controlled-Z
    Cz,
    /// Swap
    Swap,
    /// Anything else — treated as a no-op
    Unknown(String),
}

impl GateKind {
    /// Parse a wire type string (case-insensitive, `cnot` aliases `cx`)
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "i" | "id" => Self::I,
            "x" => Self::X,
            "y" => Self::Y,
            "z" => Self::Z,
            "h" => Self::H,
            "s" => Self::S,
            "sdg" => Self::Sdg,
            "sx" => Self::Sx,
            "t" => Self::T,
            "tdg" => Self::Tdg,
            "rx" => Self::Rx,
            "ry" => Self::Ry,
            "rz" => Self::Rz,
            "p" | "phase" | "u1" => Self::Phase,
            "cp" | "cphase" => Self::CPhase,
            "cx" | "cnot" => Self::Cx,
            "cz" => Self::Cz,
            "swap" => Self::Swap,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether this gate family takes a rotation angle
    pub fn is_parametrized(&self) -> bool {
        matches!(
            self,
            Self::Rx | Self::Ry | Self::Rz | Self::Phase | Self::CPhase
        )
    }

    /// Whether the engine special-cases this as a two-qubit gate
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Self::Cx | Self::Cz | Self::Swap)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::Sdg => "S†",
            Self::Sx => "√X",
            Self::T => "T",
            Self::Tdg => "T†",
            Self::Rx => "RX",
            Self::Ry => "RY",
            Self::Rz => "RZ",
            Self::Phase => "P",
            Self::CPhase => "CP",
            Self::Cx => "CX",
            Self::Cz => "CZ",
            Self::Swap => "SWAP",
            Self::Unknown(name) => name,
        };
        write!(f, "{}", name)
    }
}

/// Normalized gate parameters
///
/// The wire format carries an open `params` map; this variant is the typed
/// form the rest of the workspace consumes. Rotation-family gates carry an
/// angle in radians, everything else carries nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateParams {
    /// No parameters
    None,
    /// Rotation angle in radians
    Angle(f64),
}

impl GateParams {
    /// The angle, defaulting to zero for parameterless gates
    #[inline]
    pub fn angle_or_zero(&self) -> f64 {
        match self {
            Self::Angle(a) => *a,
            Self::None => 0.0,
        }
    }
}

/// A gate operation in the editor's wire format
///
/// `position` defines execution order; ties are broken by list order.
/// Two-qubit gates put the control in `qubit` and the target in
/// `targets[0]` (for SWAP, the two legs).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateSpec {
    /// Gate type string, e.g. "h", "cx", "rx"
    #[serde(rename = "type")]
    pub gate_type: String,
    /// Primary qubit (control for two-qubit gates)
    pub qubit: usize,
    /// Target qubits for multi-qubit gates
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub targets: SmallVec<[usize; 2]>,
    /// Control qubits (unused by the preview model beyond `qubit`)
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub controls: SmallVec<[usize; 2]>,
    /// Open parameter map; normalized via [`GateSpec::params`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, Value>>,
    /// Execution position (step k+1 applies gates at position k)
    pub position: usize,
}

impl GateSpec {
    /// Create a parameterless single-qubit gate
    pub fn single(gate_type: &str, qubit: usize, position: usize) -> Self {
        Self {
            gate_type: gate_type.to_string(),
            qubit,
            targets: SmallVec::new(),
            controls: SmallVec::new(),
            params: None,
            position,
        }
    }

    /// Create a two-qubit gate with `qubit` as control and `target` as target
    pub fn controlled(gate_type: &str, control: usize, target: usize, position: usize) -> Self {
        Self {
            gate_type: gate_type.to_string(),
            qubit: control,
            targets: SmallVec::from_slice(&[target]),
            controls: SmallVec::new(),
            params: None,
            position,
        }
    }

    /// Create a rotation gate with an angle in radians
    pub fn rotation(gate_type: &str, qubit: usize, angle: f64, position: usize) -> Self {
        let mut params = HashMap::new();
        params.insert("angle".to_string(), Value::from(angle));
        Self {
            gate_type: gate_type.to_string(),
            qubit,
            targets: SmallVec::new(),
            controls: SmallVec::new(),
            params: Some(params),
            position,
        }
    }

    /// The parsed gate family
    #[inline]
    pub fn kind(&self) -> GateKind {
        GateKind::parse(&self.gate_type)
    }

    /// The first target qubit, if any
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.targets.first().copied()
    }

    /// Normalize the open parameter map into [`GateParams`]
    ///
    /// Keys are tried in the original editor's priority order:
    /// `theta` for RX/RY, `phi`/`lambda` for RZ and phase gates, with
    /// `angle` as the common fallback. An absent or unreadable angle on a
    /// rotation gate resolves to zero (a no-op rotation) rather than an
    /// error.
    pub fn params(&self) -> GateParams {
        let kind = self.kind();
        if !kind.is_parametrized() {
            return GateParams::None;
        }
        let keys: &[&str] = match kind {
            GateKind::Rx | GateKind::Ry => &["theta", "angle"],
            _ => &["phi", "lambda", "angle"],
        };
        let raw = self
            .params
            .as_ref()
            .and_then(|map| keys.iter().find_map(|k| map.get(*k)))
            .and_then(numeric_value);
        match raw {
            Some(a) => GateParams::Angle(normalize_angle(a)),
            None => GateParams::Angle(0.0),
        }
    }
}

/// Read a JSON value as a number, accepting numeric strings
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Angles within [-2π, 2π] are taken as radians, anything larger as degrees
fn normalize_angle(angle: f64) -> f64 {
    if angle.abs() <= 2.0 * PI {
        angle
    } else {
        angle * PI / 180.0
    }
}

/// Validate a gate list against a register size
///
/// This is the explicit validation surface for UI callers that want to
/// reject a circuit up front. The evolution engine itself never fails on
/// these conditions — it skips the offending gate.
pub fn validate(gates: &[GateSpec], num_qubits: usize) -> Result<()> {
    if num_qubits == 0 {
        return Err(CoreError::EmptyRegister);
    }
    for gate in gates {
        if gate.qubit >= num_qubits {
            return Err(CoreError::invalid_qubit(gate.qubit, num_qubits));
        }
        if gate.kind().is_two_qubit() {
            let target = gate.target().ok_or_else(|| CoreError::MissingTarget {
                gate: gate.gate_type.clone(),
            })?;
            if target >= num_qubits {
                return Err(CoreError::invalid_qubit(target, num_qubits));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_aliases() {
        assert_eq!(GateKind::parse("cnot"), GateKind::Cx);
        assert_eq!(GateKind::parse("CX"), GateKind::Cx);
        assert_eq!(GateKind::parse("p"), GateKind::Phase);
        assert_eq!(GateKind::parse("frobnicate"), GateKind::Unknown("frobnicate".to_string()));
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "type": "cx",
            "qubit": 0,
            "targets": [1],
            "position": 2
        }"#;
        let gate: GateSpec = serde_json::from_str(json).unwrap();
        assert_eq!(gate.kind(), GateKind::Cx);
        assert_eq!(gate.target(), Some(1));
        assert_eq!(gate.position, 2);
        assert_eq!(gate.params(), GateParams::None);
    }

    #[test]
    fn test_angle_key_priority() {
        let json = r#"{"type": "rx", "qubit": 0, "position": 0,
                       "params": {"theta": 1.5707963267948966, "angle": 0.1}}"#;
        let gate: GateSpec = serde_json::from_str(json).unwrap();
        match gate.params() {
            GateParams::Angle(a) => assert!((a - PI / 2.0).abs() < 1e-12),
            other => panic!("expected angle, got {:?}", other),
        }
    }

    #[test]
    fn test_angle_string_value() {
        let json = r#"{"type": "rz", "qubit": 0, "position": 0, "params": {"phi": "3.14"}}"#;
        let gate: GateSpec = serde_json::from_str(json).unwrap();
        assert_eq!(gate.params(), GateParams::Angle(3.14));
    }

    #[test]
    fn test_angle_degrees_heuristic() {
        // 90 exceeds 2π, so it is read as degrees
        let gate = GateSpec::rotation("ry", 0, 90.0, 0);
        match gate.params() {
            GateParams::Angle(a) => assert!((a - PI / 2.0).abs() < 1e-12),
            other => panic!("expected angle, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_angle_is_zero() {
        let gate = GateSpec::single("rx", 0, 0);
        assert_eq!(gate.params(), GateParams::Angle(0.0));
    }

    #[test]
    fn test_unknown_gate_has_no_params() {
        let gate = GateSpec::single("mystery", 0, 0);
        assert_eq!(gate.params(), GateParams::None);
        assert!(matches!(gate.kind(), GateKind::Unknown(_)));
    }

    #[test]
    fn test_validate_out_of_range() {
        let gates = vec![GateSpec::single("h", 3, 0)];
        let err = validate(&gates, 2).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQubit { qubit: 3, num_qubits: 2 }));
    }

    #[test]
    fn test_validate_missing_target() {
        let gates = vec![GateSpec::single("cx", 0, 0)];
        let err = validate(&gates, 2).unwrap_err();
        assert!(matches!(err, CoreError::MissingTarget { .. }));
    }

    #[test]
    fn test_validate_ok() {
        let gates = vec![
            GateSpec::single("h", 0, 0),
            GateSpec::controlled("cx", 0, 1, 1),
        ];
        assert!(validate(&gates, 2).is_ok());
    }
}
