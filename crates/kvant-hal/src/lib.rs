//! `kvant-hal` — backend abstraction for circuit execution.
//!
//! Defines the async [`Backend`] contract that execution targets
//! implement, together with the job lifecycle ([`JobId`], [`JobStatus`],
//! [`Job`]), capability introspection ([`Capabilities`]), and unified
//! result handling ([`ExecutionResult`], [`Counts`]).
//!
//! # Implementing a backend
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use kvant_hal::{Backend, Capabilities, ExecutionResult, HalResult, JobId, JobStatus};
//! use kvant_ir::Circuit;
//!
//! struct MyBackend {
//!     capabilities: Capabilities,
//! }
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str {
//!         "my-backend"
//!     }
//!
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     async fn submit(&self, circuit: &Circuit, shots: u64) -> HalResult<JobId> {
//!         // dispatch the circuit, return a queued job id
//!         # unimplemented!()
//!     }
//!     // status / result / cancel elided
//!     # async fn status(&self, _: &JobId) -> HalResult<JobStatus> { unimplemented!() }
//!     # async fn result(&self, _: &JobId) -> HalResult<ExecutionResult> { unimplemented!() }
//!     # async fn cancel(&self, _: &JobId) -> HalResult<()> { unimplemented!() }
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::Backend;
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
