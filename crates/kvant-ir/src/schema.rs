//! Circuit wire schema.
//!
//! The JSON interchange format consumed and produced by the engine and
//! transported by remote-execution bridges. Field names are fixed by the
//! schema, not by Rust conventions — do not rename them.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "name": "bell",
//!   "numberOfQubits": 2,
//!   "numberOfClassicalBits": 2,
//!   "gates": [
//!     { "name": "h",  "qubits": [0] },
//!     { "name": "cx", "qubits": [0, 1] }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// Schema version written by this encoder.
pub const SCHEMA_VERSION: &str = "1.0";

/// Wire representation of a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitSchema {
    /// Schema version, e.g. "1.0".
    pub version: String,
    /// Optional circuit name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of qubits.
    pub number_of_qubits: u32,
    /// Number of classical bits.
    pub number_of_classical_bits: u32,
    /// Gate sequence in application order.
    pub gates: Vec<GateSchema>,
    /// Optional descriptive metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SchemaMetadata>,
}

/// Wire representation of one gate application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSchema {
    /// Canonical gate name, e.g. "h", "x", "cx", "rx", "ccx".
    pub name: String,
    /// Operand qubit indices: `[target]`, `[control, target]`, or
    /// `[control1, control2, target]`.
    pub qubits: Vec<u32>,
    /// Rotation parameters; absent for fixed gates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<f64>>,
    /// Classical-bit operands; only present for "measure" entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clbits: Option<Vec<u32>>,
}

/// Optional circuit metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classification tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CircuitSchema {
    /// Encode a circuit into its wire representation.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let gates = circuit
            .instructions()
            .iter()
            .map(|instruction| match instruction.kind {
                InstructionKind::Gate(gate) => {
                    let params = gate.params();
                    GateSchema {
                        name: gate.name().to_string(),
                        qubits: instruction.qubits.iter().map(|q| q.0).collect(),
                        params: if params.is_empty() { None } else { Some(params) },
                        clbits: None,
                    }
                }
                InstructionKind::Measure => GateSchema {
                    name: "measure".to_string(),
                    qubits: instruction.qubits.iter().map(|q| q.0).collect(),
                    params: None,
                    clbits: Some(instruction.clbits.iter().map(|c| c.0).collect()),
                },
            })
            .collect();

        Self {
            version: SCHEMA_VERSION.to_string(),
            name: Some(circuit.name().to_string()),
            number_of_qubits: circuit.num_qubits(),
            number_of_classical_bits: circuit.num_clbits(),
            gates,
            metadata: Some(SchemaMetadata {
                created_at: Some(Utc::now()),
                description: None,
                tags: vec![],
            }),
        }
    }

    /// Decode the wire representation back into a circuit.
    ///
    /// Fails with [`IrError::UnsupportedGate`] for names outside the
    /// catalog, [`IrError::UnsupportedSchemaVersion`] for non-1.x
    /// versions, and the usual builder errors for bad operand indices.
    pub fn to_circuit(&self) -> IrResult<Circuit> {
        if !self.version.starts_with("1.") {
            return Err(IrError::UnsupportedSchemaVersion(self.version.clone()));
        }

        let name = self.name.clone().unwrap_or_else(|| "circuit".to_string());
        let mut circuit = Circuit::with_size(name, self.number_of_qubits, self.number_of_classical_bits);

        for entry in &self.gates {
            let qubits: Vec<QubitId> = entry.qubits.iter().map(|&q| QubitId(q)).collect();
            if entry.name == "measure" {
                let clbits = entry.clbits.clone().unwrap_or_else(|| entry.qubits.clone());
                for (&qubit, &clbit) in qubits.iter().zip(&clbits) {
                    circuit.measure(qubit, ClbitId(clbit))?;
                }
            } else {
                let params = entry.params.clone().unwrap_or_default();
                let gate = StandardGate::from_name(&entry.name, &params)?;
                circuit.push(Instruction::gate(gate, qubits))?;
            }
        }

        Ok(circuit)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Circuit {
    /// Encode this circuit as schema JSON.
    pub fn to_schema_json(&self) -> IrResult<String> {
        CircuitSchema::from_circuit(self).to_json()
    }

    /// Decode a circuit from schema JSON.
    pub fn from_schema_json(json: &str) -> IrResult<Circuit> {
        CircuitSchema::from_json(json)?.to_circuit()
    }
}
