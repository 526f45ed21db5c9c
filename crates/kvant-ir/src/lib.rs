//! Kvant Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Kvant: the gate catalog, qubit addressing, the ordered
//! circuit builder, ASCII rendering, and the JSON wire schema consumed by
//! execution backends.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered instruction list. Appends are validated,
//! so a built circuit always references qubits inside its own register.
//! The representation is deliberately linear: executors replay it front
//! to back, [`Circuit::inverse`] replays it back to front with adjoint
//! gates.
//!
//! # Core Components
//!
//! - **Qubits and classical bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`] — the catalog of unitaries with canonical
//!   wire names (`h`, `x`, `cx`, `ccx`, ...)
//! - **Instructions**: [`Instruction`] combining gates with operands
//! - **Circuit**: [`Circuit`] builder with a fluent gate API
//! - **Schema**: [`CircuitSchema`] — the JSON interchange format
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use kvant_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.gate_count(), 2);
//!
//! // Round-trip through the wire schema.
//! let json = circuit.to_schema_json().unwrap();
//! let decoded = Circuit::from_schema_json(&json).unwrap();
//! assert_eq!(decoded.instructions(), circuit.instructions());
//! ```

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod schema;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
pub use schema::{CircuitSchema, GateSchema, SchemaMetadata, SCHEMA_VERSION};
