//! Bell-pair preparation and measurement.

use rustc_hash::FxHashMap;

use kvant_ir::{Circuit, QubitId};
use kvant_sim::Simulator;

use crate::error::AlgoResult;

/// Build the two-qubit Bell circuit: H on qubit 0 then CX onto qubit 1,
/// preparing (|00⟩ + |11⟩)/√2.
pub fn bell_circuit() -> Circuit {
    let mut circuit = Circuit::with_size("bell", 2, 0);
    circuit
        .h(QubitId(0))
        .and_then(|c| c.cx(QubitId(0), QubitId(1)))
        .expect("fresh 2-qubit circuit accepts H and CX");
    circuit
}

/// Repeated preparation and measurement of a Bell pair.
///
/// The outcomes are perfectly correlated: every shot lands on "00" or
/// "11", each with probability one half.
#[derive(Debug, Default)]
pub struct BellExperiment {
    simulator: Simulator,
}

impl BellExperiment {
    /// Create a Bell experiment with the default simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the experiment and return the outcome histogram.
    pub fn run(&self, shots: u64) -> AlgoResult<FxHashMap<String, u64>> {
        Ok(self.simulator.sample(&bell_circuit(), shots)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_circuit_shape() {
        let circuit = bell_circuit();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn test_outcomes_are_correlated() {
        let counts = BellExperiment::new().run(2000).unwrap();
        assert_eq!(counts.values().sum::<u64>(), 2000);
        for (key, count) in &counts {
            assert!(key == "00" || key == "11", "uncorrelated outcome {key}");
            // Each branch should be near half; 6σ ≈ 134 of 2000.
            assert!((*count as i64 - 1000).abs() < 200, "skewed count {count}");
        }
    }
}
