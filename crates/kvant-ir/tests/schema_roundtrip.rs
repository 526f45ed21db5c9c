//! Property tests for the circuit wire schema.

use proptest::prelude::*;

use kvant_ir::{Circuit, QubitId, StandardGate};

/// Strategy producing an arbitrary catalog gate with in-range operands
/// for an `n`-qubit circuit (n >= 3).
fn arb_gate(n: u32) -> impl Strategy<Value = (StandardGate, Vec<u32>)> {
    let fixed = prop::sample::select(vec![
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::H,
        StandardGate::S,
        StandardGate::Sdg,
        StandardGate::T,
        StandardGate::Tdg,
    ]);
    let angle = -10.0..10.0f64;
    prop_oneof![
        (fixed, 0..n).prop_map(|(g, q)| (g, vec![q])),
        (angle.clone(), 0..n).prop_map(|(t, q)| (StandardGate::Rx(t), vec![q])),
        (angle.clone(), 0..n).prop_map(|(t, q)| (StandardGate::Ry(t), vec![q])),
        (angle.clone(), 0..n).prop_map(|(t, q)| (StandardGate::Rz(t), vec![q])),
        (angle.clone(), angle.clone(), angle, 0..n)
            .prop_map(|(t, p, l, q)| (StandardGate::U3(t, p, l), vec![q])),
        distinct_pair(n).prop_map(|(a, b)| (StandardGate::CX, vec![a, b])),
        distinct_pair(n).prop_map(|(a, b)| (StandardGate::CZ, vec![a, b])),
        distinct_pair(n).prop_map(|(a, b)| (StandardGate::Swap, vec![a, b])),
        distinct_triple(n).prop_map(|(a, b, c)| (StandardGate::CCX, vec![a, b, c])),
    ]
}

fn distinct_pair(n: u32) -> impl Strategy<Value = (u32, u32)> {
    (0..n, 0..n - 1).prop_map(move |(a, b)| {
        let b = if b >= a { b + 1 } else { b };
        (a, b)
    })
}

fn distinct_triple(n: u32) -> impl Strategy<Value = (u32, u32, u32)> {
    (0..n, 0..n - 1, 0..n - 2).prop_map(move |(a, b, c)| {
        let b = if b >= a { b + 1 } else { b };
        let mut c = c;
        for taken in [a.min(b), a.max(b)] {
            if c >= taken {
                c += 1;
            }
        }
        (a, b, c)
    })
}

fn build_circuit(n: u32, gates: &[(StandardGate, Vec<u32>)]) -> Circuit {
    let mut circuit = Circuit::with_size("prop", n, 0);
    for (gate, qubits) in gates {
        let qubits: Vec<QubitId> = qubits.iter().map(|&q| QubitId(q)).collect();
        circuit
            .push(kvant_ir::Instruction::gate(*gate, qubits))
            .expect("strategy produces valid operands");
    }
    circuit
}

proptest! {
    #[test]
    fn schema_round_trip_is_lossless(gates in prop::collection::vec(arb_gate(5), 0..40)) {
        let circuit = build_circuit(5, &gates);

        let json = circuit.to_schema_json().unwrap();
        let decoded = Circuit::from_schema_json(&json).unwrap();

        prop_assert_eq!(decoded.num_qubits(), circuit.num_qubits());
        prop_assert_eq!(decoded.instructions(), circuit.instructions());
    }

    #[test]
    fn inverse_of_inverse_is_identity_program(gates in prop::collection::vec(arb_gate(4), 1..25)) {
        let circuit = build_circuit(4, &gates);

        let double_inverse = circuit.inverse().unwrap().inverse().unwrap();
        prop_assert_eq!(double_inverse.instructions(), circuit.instructions());
    }
}
