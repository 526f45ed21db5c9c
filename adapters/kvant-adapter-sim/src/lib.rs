//! `kvant-adapter-sim` — in-process statevector backend.
//!
//! Fulfills the `kvant_hal::Backend` contract with `kvant_sim`, so code
//! written against the HAL runs locally without any remote target.
//!
//! ```rust
//! use kvant_adapter_sim::SimulatorBackend;
//! use kvant_hal::Backend;
//! use kvant_ir::{Circuit, QubitId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut circuit = Circuit::with_size("bell", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let backend = SimulatorBackend::new();
//! let job_id = backend.submit(&circuit, 100).await.unwrap();
//! let result = backend.wait(&job_id).await.unwrap();
//! assert_eq!(result.counts.total(), 100);
//! # }
//! ```

pub mod simulator;

pub use simulator::SimulatorBackend;
