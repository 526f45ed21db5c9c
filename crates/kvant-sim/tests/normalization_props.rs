//! Property tests for statevector unitarity.

use proptest::prelude::*;

use kvant_ir::StandardGate;
use kvant_sim::Register;

/// Strategy producing an arbitrary catalog gate with in-range, distinct
/// operands for an `n`-qubit register (n >= 3).
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

proptest! {
    #[test]
    fn norm_is_preserved_by_arbitrary_gate_sequences(
        gates in prop::collection::vec(arb_gate(4), 0..60),
    ) {
        let mut reg = Register::new(4).unwrap();
        for (gate, qubits) in &gates {
            reg.apply(*gate, qubits).unwrap();
            // Every kernel is unitary; the norm never drifts.
            prop_assert!((reg.norm_sqr() - 1.0).abs() < 1e-9);
        }
        let total: f64 = reg.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gate_then_adjoint_is_identity(gates in prop::collection::vec(arb_gate(3), 1..20)) {
        let mut reg = Register::new(3).unwrap();
        for (gate, qubits) in &gates {
            reg.apply(*gate, qubits).unwrap();
        }
        for (gate, qubits) in gates.iter().rev() {
            reg.apply(gate.adjoint(), qubits).unwrap();
        }
        // Back to |000⟩ up to rounding.
        prop_assert!((reg.get_amplitude(0).unwrap().norm_sqr() - 1.0).abs() < 1e-9);
    }
}
