//! Multi-qubit register: a 2ⁿ-amplitude statevector.
//!
//! Gate application walks the amplitude buffer with bit masks: for a
//! single-qubit gate on qubit `q`, every pair of basis indices differing
//! only in bit `q` gets the 2×2 transform; all other amplitudes are
//! untouched. Every kernel is O(2ⁿ).

use num_complex::Complex64;
use rand::Rng;
use rustc_hash::FxHashMap;

use kvant_ir::{IrError, StandardGate};

use crate::complex::EPSILON;
use crate::error::{SimError, SimResult};

/// Maximum supported register width.
///
/// 2²⁴ amplitudes at 16 bytes each is 256 MiB; the doubling per qubit
/// makes anything much past this impractical on one machine.
pub const MAX_QUBITS: u32 = 24;

/// An n-qubit state: exclusive owner of its 2ⁿ complex amplitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Register {
    /// Create a register initialized to |0…0⟩.
    ///
    /// Fails with [`SimError::CapacityExceeded`] before allocating when
    /// `num_qubits` exceeds [`MAX_QUBITS`].
    pub fn new(num_qubits: u32) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::CapacityExceeded {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Create a register from an explicit amplitude vector.
    ///
    /// The length must be a power of two within the capacity bound and
    /// the squared magnitudes must sum to 1 within tolerance (the same
    /// strict policy as single-qubit construction).
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(SimError::InvalidDimension { len });
        }
        let num_qubits = len.trailing_zeros();
        if num_qubits > MAX_QUBITS {
            return Err(SimError::CapacityExceeded {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let norm_sqr: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
        if (norm_sqr - 1.0).abs() > EPSILON {
            return Err(SimError::NotNormalized { norm_sqr });
        }
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the dimension of the state space (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get the amplitude buffer.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get one amplitude, bounds-checked.
    pub fn get_amplitude(&self, index: usize) -> SimResult<Complex64> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(SimError::BasisIndexOutOfRange {
                index,
                dim: self.dim(),
            })
    }

    /// Get the measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of squared amplitude magnitudes. 1 for any reachable state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Reset the register to |0…0⟩.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    // =========================================================================
    // Gate application
    // =========================================================================

    /// Apply a gate to the given qubits.
    ///
    /// Operand indices are bounds-checked and must be distinct; the
    /// operand count must match the gate arity.
    pub fn apply(&mut self, gate: StandardGate, qubits: &[u32]) -> SimResult<()> {
        if qubits.len() as u32 != gate.num_qubits() {
            return Err(SimError::Ir(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got: qubits.len() as u32,
            }));
        }
        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit >= self.num_qubits {
                return Err(SimError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if qubits[..i].contains(&qubit) {
                return Err(SimError::DuplicateQubit { qubit });
            }
        }

        match gate {
            StandardGate::X => self.apply_x(qubits[0] as usize),
            StandardGate::Z => self.apply_diagonal_phase(qubits[0] as usize, std::f64::consts::PI),
            StandardGate::S => {
                self.apply_diagonal_phase(qubits[0] as usize, std::f64::consts::FRAC_PI_2);
            }
            StandardGate::Sdg => {
                self.apply_diagonal_phase(qubits[0] as usize, -std::f64::consts::FRAC_PI_2);
            }
            StandardGate::T => {
                self.apply_diagonal_phase(qubits[0] as usize, std::f64::consts::FRAC_PI_4);
            }
            StandardGate::Tdg => {
                self.apply_diagonal_phase(qubits[0] as usize, -std::f64::consts::FRAC_PI_4);
            }
            StandardGate::Rz(theta) => self.apply_rz(qubits[0] as usize, theta),
            StandardGate::CX => self.apply_cx(qubits[0] as usize, qubits[1] as usize),
            StandardGate::CZ => self.apply_cz(qubits[0] as usize, qubits[1] as usize),
            StandardGate::Swap => self.apply_swap(qubits[0] as usize, qubits[1] as usize),
            StandardGate::CCX => {
                self.apply_ccx(qubits[0] as usize, qubits[1] as usize, qubits[2] as usize);
            }
            // Everything else is a dense single-qubit unitary.
            g => {
                let matrix = g.matrix().ok_or_else(|| {
                    SimError::Ir(IrError::UnsupportedGate(g.name().to_string()))
                })?;
                self.apply_matrix(qubits[0] as usize, matrix);
            }
        }
        Ok(())
    }

    /// Apply an arbitrary 2×2 unitary to one qubit's subspace.
    fn apply_matrix(&mut self, qubit: usize, m: [[Complex64; 2]; 2]) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    /// Multiply the |1⟩ half of a qubit's subspace by e^{iθ}.
    ///
    /// Covers Z (θ=π), S, Sdg, T, and Tdg without touching the |0⟩ half.
    fn apply_diagonal_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & c1_mask != 0) && (i & c2_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    // =========================================================================
    // Oracle primitives
    // =========================================================================

    /// Flip the sign of one basis amplitude.
    pub fn phase_flip(&mut self, index: usize) -> SimResult<()> {
        let dim = self.dim();
        let amp = self
            .amplitudes
            .get_mut(index)
            .ok_or(SimError::BasisIndexOutOfRange { index, dim })?;
        *amp = -*amp;
        Ok(())
    }

    /// Reflect every amplitude about the mean amplitude (the Grover
    /// diffusion step).
    pub fn invert_about_mean(&mut self) {
        let mean = self.amplitudes.iter().sum::<Complex64>() / self.dim() as f64;
        for amp in &mut self.amplitudes {
            *amp = 2.0 * mean - *amp;
        }
    }

    /// Relabel basis states through a bijection: `new[f(i)] = old[i]`.
    ///
    /// Classical reversible functions (oracles) are exactly such
    /// permutations. `f` must map `[0, 2ⁿ)` onto itself one-to-one;
    /// a non-bijective `f` is rejected because it would destroy
    /// probability mass.
    pub fn permute_basis(&mut self, f: impl Fn(usize) -> usize) -> SimResult<()> {
        let dim = self.dim();
        let mut permuted = vec![Complex64::new(0.0, 0.0); dim];
        let mut seen = vec![false; dim];
        for (i, &amp) in self.amplitudes.iter().enumerate() {
            let j = f(i);
            if j >= dim {
                return Err(SimError::BasisIndexOutOfRange { index: j, dim });
            }
            if seen[j] {
                return Err(SimError::NotNormalized {
                    norm_sqr: f64::NAN,
                });
            }
            seen[j] = true;
            permuted[j] = amp;
        }
        self.amplitudes = permuted;
        Ok(())
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Sample one basis-state index from the measurement distribution.
    pub fn sample(&self) -> usize {
        let (cumulative, total) = self.cumulative_weights();
        self.draw(&cumulative, total, rand::thread_rng().r#gen())
    }

    /// Sample `shots` independent outcomes, returning a bitstring
    /// histogram whose counts sum to `shots`.
    ///
    /// The distribution is computed once; each draw is a binary search
    /// over the cumulative weights, so sampling cost does not depend on
    /// how the state was prepared.
    pub fn measure_all(&self, shots: u64) -> FxHashMap<String, u64> {
        let (cumulative, total) = self.cumulative_weights();

        let mut rng = rand::thread_rng();
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for _ in 0..shots {
            let outcome = self.draw(&cumulative, total, rng.r#gen());
            *counts.entry(self.bitstring(outcome)).or_insert(0) += 1;
        }
        counts
    }

    /// Running sums of the basis-state probabilities, plus their total.
    fn cumulative_weights(&self) -> (Vec<f64>, f64) {
        let mut cumulative = Vec::with_capacity(self.dim());
        let mut total = 0.0;
        for amp in &self.amplitudes {
            total += amp.norm_sqr();
            cumulative.push(total);
        }
        (cumulative, total)
    }

    /// Map a uniform draw `r ∈ [0, 1)` to a basis-state index by binary
    /// search over the cumulative weights.
    fn draw(&self, cumulative: &[f64], total: f64, r: f64) -> usize {
        cumulative
            .partition_point(|&c| c <= r * total)
            .min(self.dim() - 1)
    }

    /// Measure one qubit and collapse the register onto the outcome.
    pub fn measure(&mut self, qubit: u32) -> SimResult<u8> {
        let prob_zero = self.marginal_prob_zero(qubit)?;
        let r: f64 = rand::thread_rng().r#gen();
        let outcome = u8::from(r >= prob_zero);
        self.collapse(qubit, outcome)?;
        Ok(outcome)
    }

    /// Project one qubit onto a definite outcome and renormalize.
    ///
    /// Fails with [`SimError::EmptyState`] when the requested outcome
    /// carries numerically zero probability mass.
    pub fn collapse(&mut self, qubit: u32, outcome: u8) -> SimResult<()> {
        let prob_zero = self.marginal_prob_zero(qubit)?;
        let marginal = if outcome == 0 { prob_zero } else { 1.0 - prob_zero };
        if marginal < EPSILON {
            return Err(SimError::EmptyState { qubit, outcome });
        }

        let mask = 1usize << qubit;
        let keep_set = outcome == 1;
        let scale = 1.0 / marginal.sqrt();
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if ((i & mask) != 0) == keep_set {
                *amp *= scale;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        Ok(())
    }

    /// Marginal probability of measuring `qubit` as 0.
    pub fn marginal_prob_zero(&self, qubit: u32) -> SimResult<f64> {
        if qubit >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        let mask = 1usize << qubit;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum())
    }

    /// Convert a basis-state index to its outcome bitstring, qubit 0
    /// leftmost.
    pub fn bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits as usize)
            .chars()
            .rev()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{approx_eq, approx_eq_f64};
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_initial_state() {
        let reg = Register::new(2).unwrap();
        assert!(approx_eq(reg.amplitudes()[0], Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert!(approx_eq(reg.amplitudes()[i], Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_capacity_cap() {
        assert!(Register::new(MAX_QUBITS).is_ok());
        assert!(matches!(
            Register::new(MAX_QUBITS + 1),
            Err(SimError::CapacityExceeded { requested, max })
                if requested == MAX_QUBITS + 1 && max == MAX_QUBITS
        ));
    }

    #[test]
    fn test_from_amplitudes_policy() {
        let ok = Register::from_amplitudes(vec![
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(0.0, FRAC_1_SQRT_2),
        ])
        .unwrap();
        assert_eq!(ok.num_qubits(), 1);

        assert!(matches!(
            Register::from_amplitudes(vec![
                Complex64::new(1.0, 0.0),
                Complex64::new(1.0, 0.0),
            ]),
            Err(SimError::NotNormalized { .. })
        ));

        // A length that is not a power of two names the real defect.
        assert!(matches!(
            Register::from_amplitudes(vec![Complex64::new(1.0, 0.0); 3]),
            Err(SimError::InvalidDimension { len: 3 })
        ));
        assert!(matches!(
            Register::from_amplitudes(vec![]),
            Err(SimError::InvalidDimension { len: 0 })
        ));
    }

    #[test]
    fn test_bell_state() {
        let mut reg = Register::new(2).unwrap();
        reg.apply(StandardGate::H, &[0]).unwrap();
        reg.apply(StandardGate::CX, &[0, 1]).unwrap();

        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert!(approx_eq(reg.amplitudes()[0], h));
        assert!(approx_eq(reg.amplitudes()[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(reg.amplitudes()[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(reg.amplitudes()[3], h));
    }

    #[test]
    fn test_self_inverse_gates() {
        let mut reg = Register::new(2).unwrap();
        // Prepare a non-trivial state first.
        reg.apply(StandardGate::Ry(0.8), &[0]).unwrap();
        reg.apply(StandardGate::Rx(-0.3), &[1]).unwrap();
        let before = reg.clone();

        for (gate, qubits) in [
            (StandardGate::H, vec![0]),
            (StandardGate::X, vec![1]),
            (StandardGate::Y, vec![0]),
            (StandardGate::Z, vec![1]),
            (StandardGate::CX, vec![0, 1]),
            (StandardGate::CZ, vec![0, 1]),
            (StandardGate::Swap, vec![0, 1]),
        ] {
            reg.apply(gate, &qubits).unwrap();
            reg.apply(gate, &qubits).unwrap();
        }

        for (a, b) in reg.amplitudes().iter().zip(before.amplitudes()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_normalization_is_preserved() {
        let mut reg = Register::new(3).unwrap();
        let program = [
            (StandardGate::H, vec![0]),
            (StandardGate::U3(0.3, 1.2, -0.7), vec![1]),
            (StandardGate::T, vec![2]),
            (StandardGate::CX, vec![0, 2]),
            (StandardGate::Rz(2.1), vec![1]),
            (StandardGate::CCX, vec![0, 1, 2]),
            (StandardGate::Swap, vec![1, 2]),
            (StandardGate::Ry(-1.9), vec![0]),
        ];
        for (gate, qubits) in program {
            reg.apply(gate, &qubits).unwrap();
            assert!(approx_eq_f64(reg.norm_sqr(), 1.0));
        }
    }

    #[test]
    fn test_ccx_truth_table() {
        // |110⟩ (qubits 0 and 1 set) flips the target.
        let mut reg = Register::new(3).unwrap();
        reg.apply(StandardGate::X, &[0]).unwrap();
        reg.apply(StandardGate::X, &[1]).unwrap();
        reg.apply(StandardGate::CCX, &[0, 1, 2]).unwrap();
        assert!(approx_eq(reg.amplitudes()[0b111], Complex64::new(1.0, 0.0)));

        // With only one control set the target stays put.
        let mut reg = Register::new(3).unwrap();
        reg.apply(StandardGate::X, &[0]).unwrap();
        reg.apply(StandardGate::CCX, &[0, 1, 2]).unwrap();
        assert!(approx_eq(reg.amplitudes()[0b001], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_operand_validation() {
        let mut reg = Register::new(2).unwrap();
        assert!(matches!(
            reg.apply(StandardGate::H, &[5]),
            Err(SimError::QubitOutOfRange { qubit: 5, .. })
        ));
        assert!(matches!(
            reg.apply(StandardGate::CX, &[1, 1]),
            Err(SimError::DuplicateQubit { qubit: 1 })
        ));
        assert!(matches!(
            reg.apply(StandardGate::CX, &[0]),
            Err(SimError::Ir(_))
        ));
        assert!(matches!(
            reg.get_amplitude(4),
            Err(SimError::BasisIndexOutOfRange { index: 4, dim: 4 })
        ));
    }

    #[test]
    fn test_partial_measurement_collapses_bell_state() {
        let mut reg = Register::new(2).unwrap();
        reg.apply(StandardGate::H, &[0]).unwrap();
        reg.apply(StandardGate::CX, &[0, 1]).unwrap();

        let first = reg.measure(0).unwrap();
        assert!(approx_eq_f64(reg.norm_sqr(), 1.0));

        // The partner qubit is now fully determined.
        let second = reg.measure(1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collapse_onto_empty_branch_fails() {
        let mut reg = Register::new(2).unwrap();
        reg.apply(StandardGate::H, &[0]).unwrap();
        reg.apply(StandardGate::CX, &[0, 1]).unwrap();
        reg.collapse(0, 0).unwrap();

        // After projecting qubit 0 to 0, qubit 1 cannot be 1.
        assert!(matches!(
            reg.collapse(1, 1),
            Err(SimError::EmptyState { qubit: 1, outcome: 1 })
        ));
    }

    #[test]
    fn test_sample_deterministic_state() {
        // All probability mass on one basis state: every draw hits it.
        let mut reg = Register::new(3).unwrap();
        reg.apply(StandardGate::X, &[1]).unwrap();
        for _ in 0..50 {
            assert_eq!(reg.sample(), 0b010);
        }
    }

    #[test]
    fn test_sample_respects_support() {
        let mut reg = Register::new(2).unwrap();
        reg.apply(StandardGate::H, &[0]).unwrap();
        reg.apply(StandardGate::CX, &[0, 1]).unwrap();
        // Bell state: only indices 0 and 3 carry weight.
        for _ in 0..100 {
            let i = reg.sample();
            assert!(i == 0b00 || i == 0b11, "impossible outcome {i}");
        }
    }

    #[test]
    fn test_measure_all_counts_sum_to_shots() {
        let mut reg = Register::new(3).unwrap();
        for q in 0..3 {
            reg.apply(StandardGate::H, &[q]).unwrap();
        }
        let counts = reg.measure_all(4096);
        assert_eq!(counts.values().sum::<u64>(), 4096);
        assert!(counts.keys().all(|k| k.len() == 3));
    }

    #[test]
    fn test_bitstring_orientation() {
        let reg = Register::new(3).unwrap();
        // Index 0b001 means qubit 0 is set; qubit 0 is the leftmost char.
        assert_eq!(reg.bitstring(0b001), "100");
        assert_eq!(reg.bitstring(0b100), "001");
    }

    #[test]
    fn test_phase_flip_and_invert_about_mean() {
        let mut reg = Register::new(2).unwrap();
        for q in 0..2 {
            reg.apply(StandardGate::H, &[q]).unwrap();
        }
        reg.phase_flip(3).unwrap();
        assert!(approx_eq(reg.amplitudes()[3], Complex64::new(-0.5, 0.0)));

        reg.invert_about_mean();
        // One Grover iteration on 2 qubits finds the marked state exactly.
        assert!(approx_eq_f64(reg.amplitudes()[3].norm_sqr(), 1.0));
        assert!(approx_eq_f64(reg.norm_sqr(), 1.0));
    }

    #[test]
    fn test_permute_basis() {
        let mut reg = Register::new(2).unwrap();
        reg.apply(StandardGate::X, &[0]).unwrap(); // |01⟩ → index 1
        reg.permute_basis(|i| i ^ 0b10).unwrap();
        assert!(approx_eq(reg.amplitudes()[0b11], Complex64::new(1.0, 0.0)));

        assert!(matches!(
            reg.permute_basis(|_| 0),
            Err(SimError::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_rz_phases() {
        let mut reg = Register::new(1).unwrap();
        reg.apply(StandardGate::H, &[0]).unwrap();
        reg.apply(StandardGate::Rz(PI), &[0]).unwrap();
        // Rz(π) = diag(e^{-iπ/2}, e^{iπ/2}) = -i·Z up to global phase.
        let a0 = reg.amplitudes()[0];
        let a1 = reg.amplitudes()[1];
        assert!(approx_eq(a0, Complex64::new(0.0, -FRAC_1_SQRT_2)));
        assert!(approx_eq(a1, Complex64::new(0.0, FRAC_1_SQRT_2)));
    }

    #[test]
    fn test_reset() {
        let mut reg = Register::new(2).unwrap();
        reg.apply(StandardGate::H, &[0]).unwrap();
        reg.reset();
        assert!(approx_eq(reg.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq_f64(reg.norm_sqr(), 1.0));
    }
}
