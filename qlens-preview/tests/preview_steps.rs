//! End-to-end preview engine behavior, driven through the editor wire
//! format where possible.

use qlens_core::{gate, GateSpec, Qubit, StateLabel};
use qlens_preview::evolve;

fn register(n: usize) -> Vec<Qubit> {
    Qubit::register(n)
}

#[test]
fn evolve_is_deterministic() {
    let qubits = register(3);
    let gates = vec![
        GateSpec::single("h", 0, 0),
        GateSpec::rotation("rx", 1, 1.234, 0),
        GateSpec::controlled("cx", 0, 2, 1),
        GateSpec::single("s", 1, 2),
    ];
    let first = evolve(&qubits, &gates);
    let second = evolve(&qubits, &gates);
    // Bit-identical, not merely close: the engine has no randomness.
    assert_eq!(first, second);
}

#[test]
fn idle_steps_never_reapply_arithmetic() {
    // A gate only at position 0, then idle positions up to 3. Every step
    // after the first must carry exactly the same Bloch vectors.
    let qubits = register(3);
    let gates = vec![
        GateSpec::single("h", 0, 0),
        GateSpec::single("id", 1, 3),
    ];
    let steps = evolve(&qubits, &gates);
    assert_eq!(steps.len(), 5);
    for later in 2..=3 {
        for q in 0..3 {
            assert_eq!(
                steps[1].qubit_states[q].bloch, steps[later].qubit_states[q].bloch,
                "step {later} drifted on qubit {q}"
            );
        }
    }
}

#[test]
fn one_view_per_qubit_in_register_order() {
    let qubits = register(4);
    let gates = vec![GateSpec::single("x", 2, 0)];
    let steps = evolve(&qubits, &gates);
    for step in &steps {
        assert_eq!(step.qubit_states.len(), 4);
        for (i, view) in step.qubit_states.iter().enumerate() {
            assert_eq!(view.qubit, i);
        }
    }
    assert_eq!(steps[1].qubit_states[2].label, StateLabel::One);
    assert_eq!(steps[1].qubit_states[0].label, StateLabel::Zero);
}

#[test]
fn wire_format_circuit_previews() {
    // The exact shape the circuit editor sends.
    let json = r#"[
        {"type": "h", "qubit": 0, "position": 0},
        {"type": "s", "qubit": 0, "position": 1},
        {"type": "cnot", "qubit": 0, "targets": [1], "position": 2}
    ]"#;
    let gates: Vec<GateSpec> = serde_json::from_str(json).unwrap();
    let qubits = register(2);
    assert!(gate::validate(&gates, 2).is_ok());

    let steps = evolve(&qubits, &gates);
    assert_eq!(steps.len(), 4);
    // H then S turns q0 into |+i⟩
    assert_eq!(steps[2].qubit_states[0].label, StateLabel::PlusI);
    // |+i⟩ control reads P(1) = 0.5: the classical control does not fire
    assert_eq!(steps[3].qubit_states[1].label, StateLabel::Zero);
}

#[test]
fn double_hadamard_returns_home() {
    let qubits = register(1);
    let gates = vec![GateSpec::single("h", 0, 0), GateSpec::single("h", 0, 1)];
    let steps = evolve(&qubits, &gates);
    let view = &steps[2].qubit_states[0];
    assert_eq!(view.label, StateLabel::Zero);
    assert!((view.bloch.z - 1.0).abs() < 1e-9);
}

#[test]
fn history_is_rebuilt_from_scratch_per_call() {
    // Editing the circuit (different gate list) must not leak state from a
    // previous run: a fresh call starts from all-|0⟩ again.
    let qubits = register(1);
    let with_x = vec![GateSpec::single("x", 0, 0)];
    let steps_x = evolve(&qubits, &with_x);
    assert_eq!(steps_x[1].qubit_states[0].label, StateLabel::One);

    let empty: Vec<GateSpec> = Vec::new();
    let steps_empty = evolve(&qubits, &empty);
    assert_eq!(steps_empty[0].qubit_states[0].label, StateLabel::Zero);
}

#[test]
fn step_serialization_matches_panel_contract() {
    let qubits = register(1);
    let gates = vec![GateSpec::single("h", 0, 0)];
    let steps = evolve(&qubits, &gates);
    let json = serde_json::to_value(&steps).unwrap();
    let first = &json[1]["qubit_states"][0];
    assert!(first["bloch"]["x"].as_f64().unwrap() > 0.99);
    assert_eq!(first["label"], "Plus");
    assert!(first["amplitudes"].as_str().unwrap().contains("|0⟩"));
}
