//! The gate catalog: every unitary the engine knows how to apply.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use crate::error::{IrError, IrResult};

/// A standard gate with known unitary semantics.
///
/// Rotation parameters are concrete angles in radians. The catalog is
/// closed under taking adjoints: every gate's [`adjoint`](StandardGate::adjoint)
/// is again a catalog gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Pauli-X (bit flip).
    X,
    /// Pauli-Y (bit and phase flip).
    Y,
    /// Pauli-Z (phase flip).
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (π/2 phase).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (π/4 phase).
    T,
    /// T-dagger gate.
    Tdg,

    // Single-qubit rotation gates
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
    /// Universal single-qubit gate U3(θ, φ, λ).
    U3(f64, f64, f64),

    // Two-qubit gates
    /// Controlled-X (CNOT).
    CX,
    /// Controlled-Z.
    CZ,
    /// SWAP gate.
    Swap,

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
}

impl StandardGate {
    /// Get the canonical wire-format name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::U3(_, _, _) => "u3",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::U3(_, _, _) => 1,

            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,

            StandardGate::CCX => 3,
        }
    }

    /// Get the rotation parameters of this gate, in canonical order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            StandardGate::Rx(theta) | StandardGate::Ry(theta) | StandardGate::Rz(theta) => {
                vec![*theta]
            }
            StandardGate::U3(theta, phi, lambda) => vec![*theta, *phi, *lambda],
            _ => vec![],
        }
    }

    /// Get the adjoint (inverse) of this gate.
    ///
    /// Self-inverse gates return themselves; phase gates swap with their
    /// dagger twins; rotations negate their angles.
    pub fn adjoint(&self) -> StandardGate {
        match *self {
            StandardGate::S => StandardGate::Sdg,
            StandardGate::Sdg => StandardGate::S,
            StandardGate::T => StandardGate::Tdg,
            StandardGate::Tdg => StandardGate::T,
            StandardGate::Rx(theta) => StandardGate::Rx(-theta),
            StandardGate::Ry(theta) => StandardGate::Ry(-theta),
            StandardGate::Rz(theta) => StandardGate::Rz(-theta),
            // U3(θ,φ,λ)† = U3(-θ,-λ,-φ)
            StandardGate::U3(theta, phi, lambda) => StandardGate::U3(-theta, -lambda, -phi),
            g => g,
        }
    }

    /// Look up a gate by its canonical wire-format name.
    ///
    /// Fails with [`IrError::UnsupportedGate`] for names outside the
    /// catalog and [`IrError::ParameterCountMismatch`] when the parameter
    /// list has the wrong length.
    pub fn from_name(name: &str, params: &[f64]) -> IrResult<StandardGate> {
        let expect = |n: usize| -> IrResult<()> {
            if params.len() == n {
                Ok(())
            } else {
                Err(IrError::ParameterCountMismatch {
                    gate_name: name.to_string(),
                    expected: n,
                    got: params.len(),
                })
            }
        };

        let gate = match name {
            "x" => StandardGate::X,
            "y" => StandardGate::Y,
            "z" => StandardGate::Z,
            "h" => StandardGate::H,
            "s" => StandardGate::S,
            "sdg" => StandardGate::Sdg,
            "t" => StandardGate::T,
            "tdg" => StandardGate::Tdg,
            "rx" => {
                expect(1)?;
                StandardGate::Rx(params[0])
            }
            "ry" => {
                expect(1)?;
                StandardGate::Ry(params[0])
            }
            "rz" => {
                expect(1)?;
                StandardGate::Rz(params[0])
            }
            "u3" => {
                expect(3)?;
                StandardGate::U3(params[0], params[1], params[2])
            }
            "cx" => StandardGate::CX,
            "cz" => StandardGate::CZ,
            "swap" => StandardGate::Swap,
            "ccx" => StandardGate::CCX,
            other => return Err(IrError::UnsupportedGate(other.to_string())),
        };

        if gate.params().is_empty() {
            expect(0)?;
        }
        Ok(gate)
    }

    /// Get the 2×2 unitary matrix of a single-qubit gate, row-major.
    ///
    /// Returns `None` for multi-qubit gates, whose action is defined by
    /// their conditional bit-pair transforms rather than a dense matrix.
    pub fn matrix(&self) -> Option<[[Complex64; 2]; 2]> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);

        let m = match *self {
            StandardGate::X => [[zero, one], [one, zero]],
            StandardGate::Y => [[zero, -i], [i, zero]],
            StandardGate::Z => [[one, zero], [zero, -one]],
            StandardGate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            StandardGate::S => [[one, zero], [zero, i]],
            StandardGate::Sdg => [[one, zero], [zero, -i]],
            StandardGate::T => [[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            StandardGate::Tdg => [[one, zero], [zero, Complex64::from_polar(1.0, -FRAC_PI_4)]],
            StandardGate::Rx(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, -(theta / 2.0).sin());
                [[c, s], [s, c]]
            }
            StandardGate::Ry(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new((theta / 2.0).sin(), 0.0);
                [[c, -s], [s, c]]
            }
            StandardGate::Rz(theta) => [
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)],
            ],
            StandardGate::U3(theta, phi, lambda) => {
                let c = (theta / 2.0).cos();
                let s = (theta / 2.0).sin();
                [
                    [
                        Complex64::new(c, 0.0),
                        -Complex64::from_polar(s, lambda),
                    ],
                    [
                        Complex64::from_polar(s, phi),
                        Complex64::from_polar(c, phi + lambda),
                    ],
                ]
            }
            _ => return None,
        };
        Some(m)
    }
}
