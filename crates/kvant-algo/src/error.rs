//! Error types for the algorithm layer.

use thiserror::Error;

/// Errors produced when constructing or running an algorithm.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A balanced-oracle mask selects no input bit or bits outside the
    /// input register.
    #[error("Oracle mask {mask:#b} is invalid for {num_inputs} input qubits")]
    InvalidOracleMask {
        /// The offending mask.
        mask: u64,
        /// Number of input qubits.
        num_inputs: u32,
    },

    /// A Simon period is zero or outside the input register.
    #[error("Period {period:#b} is invalid for {num_inputs} input qubits")]
    InvalidPeriod {
        /// The offending period.
        period: u64,
        /// Number of input qubits.
        num_inputs: u32,
    },

    /// A marked basis state lies outside the search space.
    #[error("Marked state {marked} is out of range for {num_qubits} qubits")]
    MarkedStateOutOfRange {
        /// The offending basis-state index.
        marked: usize,
        /// Number of search qubits.
        num_qubits: u32,
    },

    /// An algorithm register has no qubits.
    #[error("Algorithm requires at least one input qubit")]
    EmptyRegister,

    /// Simulation error.
    #[error("Simulation error: {0}")]
    Sim(#[from] kvant_sim::SimError),

    /// Circuit IR error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] kvant_ir::IrError),
}

/// Result type for algorithm operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
