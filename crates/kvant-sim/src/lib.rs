//! `kvant-sim` — statevector simulation engine.
//!
//! Simulates quantum programs by direct manipulation of the 2ⁿ complex
//! amplitudes of an n-qubit state:
//!
//! - **Single-qubit states** ([`QubitState`]) with Bloch-sphere
//!   coordinates, entropy, and sampling
//! - **Registers** ([`Register`]) with bit-mask gate kernels, partial
//!   and full measurement, and oracle primitives
//! - **Execution** ([`Simulator`]) of `kvant_ir::Circuit` programs with
//!   prepare-once, sample-many shot semantics
//!
//! # Quick start
//!
//! ```rust
//! use kvant_ir::{Circuit, QubitId};
//! use kvant_sim::Simulator;
//!
//! let mut circuit = Circuit::with_size("bell", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let counts = Simulator::default().sample(&circuit, 1000).unwrap();
//! assert_eq!(counts.values().sum::<u64>(), 1000);
//! assert!(counts.keys().all(|k| k == "00" || k == "11"));
//! ```

pub mod complex;
pub mod error;
pub mod executor;
pub mod qubit;
pub mod register;

pub use error::{SimError, SimResult};
pub use executor::Simulator;
pub use qubit::QubitState;
pub use register::{Register, MAX_QUBITS};
