//! `kvant-algo` — canonical quantum algorithms on the Kvant engine.
//!
//! Each algorithm pairs a textbook circuit or oracle construction with
//! the measurement post-processing that makes its promise checkable:
//!
//! - [`bell`]: entangled-pair preparation with correlated outcomes
//! - [`deutsch_jozsa`]: constant-vs-balanced decision in one query
//! - [`grover`]: unstructured search with quadratic speedup
//! - [`simon`]: period-finding samples for the classical GF(2) solve

pub mod bell;
pub mod deutsch_jozsa;
pub mod error;
pub mod grover;
pub mod simon;

pub use bell::{bell_circuit, BellExperiment};
pub use deutsch_jozsa::{DeutschJozsa, DjOracle, FunctionClass};
pub use error::{AlgoError, AlgoResult};
pub use grover::{Grover, GroverOutcome};
pub use simon::{dot_mod2, Simon};
