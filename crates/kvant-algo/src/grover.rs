//! Grover search over an unstructured space of 2ⁿ basis states.
//!
//! Each iteration flips the phase of the marked amplitude and reflects
//! the whole state about its mean, rotating the statevector toward the
//! marked state by a fixed angle.

use std::f64::consts::FRAC_PI_4;

use rustc_hash::FxHashMap;
use tracing::debug;

use kvant_ir::StandardGate;
use kvant_sim::Register;

use crate::error::{AlgoError, AlgoResult};

/// Final state of a Grover run.
#[derive(Debug)]
pub struct GroverOutcome {
    /// The register after the final iteration.
    pub register: Register,
    /// Probability of measuring the marked state.
    pub success_probability: f64,
}

/// A Grover search instance for a single marked basis state.
#[derive(Debug, Clone)]
pub struct Grover {
    num_qubits: u32,
    marked: usize,
}

impl Grover {
    /// Create an instance searching for `marked` in a 2ⁿ space.
    pub fn new(num_qubits: u32, marked: usize) -> AlgoResult<Self> {
        if num_qubits == 0 {
            return Err(AlgoError::EmptyRegister);
        }
        if num_qubits > kvant_sim::MAX_QUBITS || marked >= 1usize << num_qubits {
            return Err(AlgoError::MarkedStateOutOfRange { marked, num_qubits });
        }
        Ok(Self { num_qubits, marked })
    }

    /// Iteration count maximizing the success probability:
    /// ⌊(π/4)·√2ⁿ⌋.
    pub fn optimal_iterations(num_qubits: u32) -> u32 {
        let space = (1u64 << num_qubits) as f64;
        (FRAC_PI_4 * space.sqrt()).floor() as u32
    }

    /// Closed-form success probability after `iterations` iterations:
    /// sin²((2k + 1)·asin(2^{-n/2})).
    pub fn predicted_success_probability(num_qubits: u32, iterations: u32) -> f64 {
        let space = (1u64 << num_qubits) as f64;
        let angle = (1.0 / space.sqrt()).asin();
        ((2 * iterations + 1) as f64 * angle).sin().powi(2)
    }

    /// Run `iterations` Grover iterations from the uniform superposition.
    pub fn run(&self, iterations: u32) -> AlgoResult<GroverOutcome> {
        let mut register = Register::new(self.num_qubits)?;
        for q in 0..self.num_qubits {
            register.apply(StandardGate::H, &[q])?;
        }

        for _ in 0..iterations {
            register.phase_flip(self.marked)?;
            register.invert_about_mean();
        }

        let success_probability = register.get_amplitude(self.marked)?.norm_sqr();
        debug!(iterations, success_probability, "Grover run complete");
        Ok(GroverOutcome {
            register,
            success_probability,
        })
    }

    /// Run with the optimal iteration count and sample `shots` outcomes.
    pub fn search(&self, shots: u64) -> AlgoResult<FxHashMap<String, u64>> {
        let outcome = self.run(Self::optimal_iterations(self.num_qubits))?;
        Ok(outcome.register.measure_all(shots))
    }

    /// The marked basis-state index.
    pub fn marked(&self) -> usize {
        self.marked
    }

    /// Number of search qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }
}
