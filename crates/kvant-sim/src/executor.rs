//! Circuit execution over a [`Register`].

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use kvant_ir::{Circuit, InstructionKind};

use crate::error::{SimError, SimResult};
use crate::register::{Register, MAX_QUBITS};

/// Statevector circuit executor.
///
/// Measurement instructions inside a circuit are deferred: execution
/// replays the gates and leaves the register in its final superposition,
/// and [`Simulator::sample`] draws outcomes from that state. Deferring
/// is exact for circuits whose measurements come last, which is every
/// circuit this workspace produces.
#[derive(Debug, Clone)]
pub struct Simulator {
    max_qubits: u32,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(MAX_QUBITS)
    }
}

impl Simulator {
    /// Create a simulator with an explicit qubit cap (at most
    /// [`MAX_QUBITS`]).
    pub fn new(max_qubits: u32) -> Self {
        Self {
            max_qubits: max_qubits.min(MAX_QUBITS),
        }
    }

    /// Get the qubit cap.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Execute a circuit on a fresh |0…0⟩ register and return the final
    /// state.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn run(&self, circuit: &Circuit) -> SimResult<Register> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(SimError::CapacityExceeded {
                requested: circuit.num_qubits(),
                max: self.max_qubits,
            });
        }
        let mut register = Register::new(circuit.num_qubits())?;
        self.run_on(circuit, &mut register)?;
        Ok(register)
    }

    /// Execute a circuit on a caller-supplied register.
    pub fn run_on(&self, circuit: &Circuit, register: &mut Register) -> SimResult<()> {
        if circuit.num_qubits() > register.num_qubits() {
            return Err(SimError::QubitOutOfRange {
                qubit: circuit.num_qubits() - 1,
                num_qubits: register.num_qubits(),
            });
        }
        debug!(
            "Executing {} instructions on {} qubits",
            circuit.len(),
            register.num_qubits()
        );
        let mut deferred = 0usize;
        for instruction in circuit.instructions() {
            match instruction.kind {
                InstructionKind::Gate(gate) => {
                    let qubits: Vec<u32> =
                        instruction.qubits.iter().map(|q| q.0).collect();
                    register.apply(gate, &qubits)?;
                }
                InstructionKind::Measure => deferred += 1,
            }
        }
        if deferred > 0 {
            debug!("Deferred {deferred} measurement instructions to sampling");
        }
        Ok(())
    }

    /// Execute a circuit once, then draw `shots` outcomes from the final
    /// state.
    ///
    /// The state is prepared a single time; sampling cost is independent
    /// of circuit depth.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name(), shots))]
    pub fn sample(&self, circuit: &Circuit, shots: u64) -> SimResult<FxHashMap<String, u64>> {
        let register = self.run(circuit)?;
        Ok(register.measure_all(shots))
    }
}
