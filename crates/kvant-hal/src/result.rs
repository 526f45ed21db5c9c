//! Execution results and outcome histograms.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::job::JobId;

/// Histogram of measurement outcomes keyed by bitstring (qubit 0 is the
/// leftmost character).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(pub FxHashMap<String, u64>);

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the count for one outcome, zero when absent.
    pub fn get(&self, outcome: &str) -> u64 {
        self.0.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Empirical probability of one outcome.
    pub fn probability(&self, outcome: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(outcome) as f64 / total as f64
    }

    /// The most frequent outcome, if any shots were recorded.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(outcome, count)| (outcome.as_str(), *count))
    }

    /// Iterate over (outcome, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(outcome, count)| (outcome.as_str(), *count))
    }
}

impl From<FxHashMap<String, u64>> for Counts {
    fn from(map: FxHashMap<String, u64>) -> Self {
        Self(map)
    }
}

/// Result of a completed job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// The job this result belongs to.
    pub job_id: JobId,
    /// Outcome histogram.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u64,
    /// Time the result was produced.
    pub completed_at: DateTime<Utc>,
    /// Backend that produced the result.
    pub backend: String,
    /// Wall-clock execution time in milliseconds, when the backend
    /// measured it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result stamped with the current time.
    pub fn new(
        job_id: JobId,
        counts: impl Into<Counts>,
        shots: u64,
        backend: impl Into<String>,
    ) -> Self {
        Self {
            job_id,
            counts: counts.into(),
            shots,
            completed_at: Utc::now(),
            backend: backend.into(),
            execution_time_ms: None,
        }
    }

    /// Attach the measured execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
