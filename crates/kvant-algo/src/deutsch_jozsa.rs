//! Deutsch–Jozsa: decide whether a promise function is constant or
//! balanced with a single oracle query.

use tracing::debug;

use kvant_ir::{Circuit, QubitId};
use kvant_sim::Simulator;

use crate::error::{AlgoError, AlgoResult};

/// A promise function over n input bits, either constant or balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DjOracle {
    /// f(x) = 0 for all x, or f(x) = 1 for all x.
    Constant(bool),
    /// f(x) = parity of the input bits selected by the mask. Balanced
    /// for any nonzero mask.
    Balanced(u64),
}

/// The algorithm's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionClass {
    /// The function takes one value everywhere.
    Constant,
    /// The function is 0 on exactly half its inputs.
    Balanced,
}

/// A Deutsch–Jozsa instance: n input qubits plus one ancilla.
#[derive(Debug)]
pub struct DeutschJozsa {
    num_inputs: u32,
    oracle: DjOracle,
}

impl DeutschJozsa {
    /// Create an instance, validating the oracle against the register
    /// width.
    pub fn new(num_inputs: u32, oracle: DjOracle) -> AlgoResult<Self> {
        if num_inputs == 0 {
            return Err(AlgoError::EmptyRegister);
        }
        if let DjOracle::Balanced(mask) = oracle {
            let width = 1u64.checked_shl(num_inputs).map_or(u64::MAX, |w| w - 1);
            if mask == 0 || mask & !width != 0 {
                return Err(AlgoError::InvalidOracleMask { mask, num_inputs });
            }
        }
        Ok(Self { num_inputs, oracle })
    }

    /// Build the interference circuit: ancilla in |−⟩, Hadamard sandwich
    /// on the inputs around the oracle.
    pub fn circuit(&self) -> AlgoResult<Circuit> {
        let n = self.num_inputs;
        let ancilla = QubitId(n);
        let mut circuit = Circuit::with_size("deutsch-jozsa", n + 1, 0);

        circuit.x(ancilla)?.h(ancilla)?;
        for q in 0..n {
            circuit.h(QubitId(q))?;
        }

        match self.oracle {
            // f(x) = 1 kicks a global phase through the |−⟩ ancilla.
            DjOracle::Constant(true) => {
                circuit.x(ancilla)?;
            }
            DjOracle::Constant(false) => {}
            DjOracle::Balanced(mask) => {
                for q in 0..n {
                    if mask & (1 << q) != 0 {
                        circuit.cx(QubitId(q), ancilla)?;
                    }
                }
            }
        }

        for q in 0..n {
            circuit.h(QubitId(q))?;
        }
        Ok(circuit)
    }

    /// Run the algorithm. The verdict is exact: the all-zero input
    /// amplitude carries either all of the probability mass (constant)
    /// or none of it (balanced).
    pub fn run(&self) -> AlgoResult<FunctionClass> {
        let circuit = self.circuit()?;
        let register = Simulator::default().run(&circuit)?;

        // Marginal probability that every input qubit reads zero; the
        // ancilla (highest bit) is ignored.
        let input_mask = (1usize << self.num_inputs) - 1;
        let prob_all_zero: f64 = register
            .amplitudes()
            .iter()
            .enumerate()
            .filter(|(i, _)| i & input_mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();
        debug!(prob_all_zero, "Interference pattern evaluated");

        if prob_all_zero > 0.5 {
            Ok(FunctionClass::Constant)
        } else {
            Ok(FunctionClass::Balanced)
        }
    }
}
