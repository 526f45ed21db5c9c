//! Statevector backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use kvant_hal::{
    Backend, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job, JobId, JobStatus,
};
use kvant_ir::Circuit;
use kvant_sim::Simulator;

const BACKEND_NAME: &str = "statevector";

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector backend.
///
/// Executes circuits in-process with [`kvant_sim::Simulator`] and keeps
/// completed results in a shared job table. Submission runs the circuit
/// eagerly; there is no queue in a single-process simulator.
pub struct SimulatorBackend {
    capabilities: Capabilities,
    simulator: Simulator,
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
}

impl SimulatorBackend {
    /// Create a backend with the full register capacity.
    pub fn new() -> Self {
        Self::with_max_qubits(kvant_sim::MAX_QUBITS)
    }

    /// Create a backend with a custom qubit cap.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        let max_qubits = max_qubits.min(kvant_sim::MAX_QUBITS);
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            simulator: Simulator::new(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Run the circuit and build its result record.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_job(&self, job_id: &JobId, circuit: &Circuit, shots: u64) -> HalResult<ExecutionResult> {
        let start = Instant::now();
        debug!(
            "Starting simulation: {} qubits, {} shots",
            circuit.num_qubits(),
            shots
        );

        let counts = self
            .simulator
            .sample(circuit, shots)
            .map_err(|e| HalError::Backend(e.to_string()))?;

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);
        Ok(
            ExecutionResult::new(job_id.clone(), Counts::from(counts), shots, BACKEND_NAME)
                .with_execution_time(elapsed.as_millis() as u64),
        )
    }

    fn lock_jobs(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, SimJob>> {
        self.jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u64) -> HalResult<JobId> {
        if circuit.num_qubits() > self.capabilities.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but this backend supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} shots requested; valid range is 1..={}",
                self.capabilities.max_shots
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(BACKEND_NAME);
        self.lock_jobs()
            .insert(job_id.0.clone(), SimJob { job, result: None });
        debug!("Submitted job: {}", job_id);

        // Single-process backend: execute eagerly rather than queueing.
        let outcome = self.run_job(&job_id, circuit, shots);

        let mut jobs = self.lock_jobs();
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            match outcome {
                Ok(result) => {
                    sim_job.result = Some(result);
                    sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
                }
                Err(e) => {
                    sim_job.job = sim_job
                        .job
                        .clone()
                        .with_status(JobStatus::Failed(e.to_string()));
                }
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        self.lock_jobs()
            .get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self.lock_jobs();
        let sim_job = jobs
            .get(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        match (&sim_job.job.status, &sim_job.result) {
            (JobStatus::Completed, Some(result)) => Ok(result.clone()),
            (JobStatus::Failed(msg), _) => Err(HalError::JobFailed(msg.clone())),
            (JobStatus::Cancelled, _) => Err(HalError::JobCancelled),
            _ => Err(HalError::Backend(format!(
                "Job {job_id} has no result yet"
            ))),
        }
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self.lock_jobs();
        let sim_job = jobs
            .get_mut(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        // Terminal states are permanent.
        if !sim_job.job.status.is_terminal() {
            sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
        }
        Ok(())
    }
}
