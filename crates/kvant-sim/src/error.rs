//! Error types for the simulation engine.

use thiserror::Error;

/// Errors produced by statevector simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A qubit index is outside the register.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the register.
        num_qubits: u32,
    },

    /// A basis-state index is outside the amplitude buffer.
    #[error("Basis index {index} is out of range for dimension {dim}")]
    BasisIndexOutOfRange {
        /// The offending basis-state index.
        index: usize,
        /// Dimension of the state space (2^n).
        dim: usize,
    },

    /// The same qubit was passed twice to one gate.
    #[error("Duplicate qubit {qubit} in gate operands")]
    DuplicateQubit {
        /// The duplicate qubit index.
        qubit: u32,
    },

    /// Requested register size exceeds the memory cap.
    ///
    /// Surfaced before any amplitude buffer is allocated.
    #[error("Requested {requested} qubits but the register cap is {max} (2^{max} amplitudes)")]
    CapacityExceeded {
        /// Requested qubit count.
        requested: u32,
        /// Maximum supported qubit count.
        max: u32,
    },

    /// Amplitude vector length is not a valid state-space dimension.
    #[error("Amplitude vector length {len} is not a nonzero power of two")]
    InvalidDimension {
        /// The offending vector length.
        len: usize,
    },

    /// Amplitudes do not form a normalized state.
    #[error("State is not normalized: squared magnitudes sum to {norm_sqr}")]
    NotNormalized {
        /// The offending sum of squared magnitudes.
        norm_sqr: f64,
    },

    /// Partial measurement hit an outcome branch with zero probability mass.
    #[error("Cannot collapse onto outcome {outcome} of qubit {qubit}: marginal probability is zero")]
    EmptyState {
        /// The measured qubit.
        qubit: u32,
        /// The outcome whose branch is empty.
        outcome: u8,
    },

    /// Division by a zero-magnitude complex number.
    #[error("Division by a zero-magnitude complex number")]
    DivisionByZero,

    /// Circuit IR error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] kvant_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
