//! ASCII rail-and-box circuit rendering.
//!
//! One rail per qubit, one column per instruction. Purely cosmetic: the
//! output is meant for terminals and log files, not for parsing.

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::instruction::InstructionKind;

/// Glyph used for a control operand.
const CONTROL: &str = "●";
/// Glyph used for a CX/CCX target operand.
const TARGET: &str = "⊕";
/// Glyph used for a swapped operand.
const CROSS: &str = "×";

impl Circuit {
    /// Render the circuit as a textual rail-and-box diagram.
    pub fn ascii_diagram(&self) -> String {
        let n = self.num_qubits() as usize;
        let mut rails: Vec<String> = (0..n).map(|q| format!("q{q}: ")).collect();

        // Left-align rail headers for double-digit registers.
        let header_width = rails.iter().map(String::len).max().unwrap_or(0);
        for rail in &mut rails {
            while rail.len() < header_width {
                rail.push(' ');
            }
            rail.push('─');
        }

        for instruction in self.instructions() {
            let cells = self.instruction_cells(instruction, n);
            let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(1);
            for (rail, cell) in rails.iter_mut().zip(&cells) {
                rail.push_str(&pad(cell, width));
                rail.push('─');
            }
        }

        let mut out = String::new();
        for rail in rails {
            out.push_str(&rail);
            out.push('\n');
        }
        out
    }

    /// Compute the per-qubit cell strings for one instruction column.
    fn instruction_cells(
        &self,
        instruction: &crate::instruction::Instruction,
        n: usize,
    ) -> Vec<String> {
        let mut cells = vec![String::from("─"); n];

        match instruction.kind {
            InstructionKind::Measure => {
                cells[instruction.qubits[0].0 as usize] = "[M]".to_string();
            }
            InstructionKind::Gate(gate) => {
                let qubits: Vec<usize> = instruction.qubits.iter().map(|q| q.0 as usize).collect();
                match gate {
                    StandardGate::CX => {
                        cells[qubits[0]] = CONTROL.to_string();
                        cells[qubits[1]] = TARGET.to_string();
                    }
                    StandardGate::CZ => {
                        cells[qubits[0]] = CONTROL.to_string();
                        cells[qubits[1]] = CONTROL.to_string();
                    }
                    StandardGate::Swap => {
                        cells[qubits[0]] = CROSS.to_string();
                        cells[qubits[1]] = CROSS.to_string();
                    }
                    StandardGate::CCX => {
                        cells[qubits[0]] = CONTROL.to_string();
                        cells[qubits[1]] = CONTROL.to_string();
                        cells[qubits[2]] = TARGET.to_string();
                    }
                    g => {
                        cells[qubits[0]] = gate_box(&g);
                    }
                }
            }
        }
        cells
    }
}

/// Format a single-qubit gate as a boxed label, e.g. `[H]` or `[RX(1.57)]`.
fn gate_box(gate: &StandardGate) -> String {
    let name = gate.name().to_uppercase();
    let params = gate.params();
    if params.is_empty() {
        format!("[{name}]")
    } else {
        let args: Vec<String> = params.iter().map(|p| format!("{p:.2}")).collect();
        format!("[{}({})]", name, args.join(","))
    }
}

/// Pad a cell to the column width with wire characters.
fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    let right = total - left;
    format!("{}{}{}", "─".repeat(left), cell, "─".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::{ClbitId, QubitId};

    #[test]
    fn test_bell_diagram() {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        let diagram = circuit.ascii_diagram();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("q0:"));
        assert!(lines[0].contains("[H]"));
        assert!(lines[0].contains(CONTROL));
        assert!(lines[1].contains(TARGET));
        assert!(lines[0].contains("[M]"));
    }

    #[test]
    fn test_rails_have_equal_length() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.rx(std::f64::consts::PI / 4.0, QubitId(1)).unwrap();
        circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();

        let diagram = circuit.ascii_diagram();
        let widths: Vec<usize> = diagram.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(diagram.contains("[RX(0.79)]"));
    }

    #[test]
    fn test_empty_circuit_renders_bare_rails() {
        let circuit = Circuit::with_size("empty", 2, 0);
        let diagram = circuit.ascii_diagram();
        assert_eq!(diagram.lines().count(), 2);
    }
}
