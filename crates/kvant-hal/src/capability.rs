//! Backend capability introspection.
//!
//! Describes what an executor can do: qubit count, supported gates, and
//! shot limits. Callers use this to decide whether a circuit can be
//! submitted at all before paying for a submission round trip.

use serde::{Deserialize, Serialize};

/// Capabilities of an execution backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set.
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u64,
    /// Whether this backend is a simulator (`true`) vs real hardware.
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Capabilities of a statevector simulator with the given width.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "statevector".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 1_000_000,
            is_simulator: true,
            features: vec!["statevector".into()],
        }
    }

    /// Check whether a circuit of the given width fits this backend.
    pub fn supports_width(&self, num_qubits: u32) -> bool {
        num_qubits <= self.num_qubits
    }
}

/// The set of gate names a backend accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    /// Canonical lowercase gate names.
    pub gates: Vec<String>,
}

impl GateSet {
    /// The full gate catalog of the circuit IR.
    pub fn universal() -> Self {
        Self {
            gates: [
                "x", "y", "z", "h", "s", "sdg", "t", "tdg", "rx", "ry", "rz", "u3", "cx", "cz",
                "swap", "ccx", "measure",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    /// Check whether a gate name is supported.
    pub fn supports(&self, name: &str) -> bool {
        self.gates.iter().any(|g| g == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(24);
        assert!(caps.is_simulator);
        assert!(caps.supports_width(24));
        assert!(!caps.supports_width(25));
        assert!(caps.gate_set.supports("ccx"));
        assert!(caps.gate_set.supports("measure"));
        assert!(!caps.gate_set.supports("iswap"));
    }
}
