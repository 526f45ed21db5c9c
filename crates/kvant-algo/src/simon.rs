//! Simon's problem: recover the hidden period of a 2-to-1 function.
//!
//! The quantum subroutine produces samples y with y·s ≡ 0 (mod 2); the
//! classical GF(2) linear solve over those samples is the caller's job.

use tracing::debug;

use kvant_ir::StandardGate;
use kvant_sim::Register;

use crate::error::{AlgoError, AlgoResult};

/// Parity of the bitwise AND of two words: the GF(2) dot product.
pub fn dot_mod2(a: u64, b: u64) -> u8 {
    ((a & b).count_ones() & 1) as u8
}

/// A Simon instance with hidden period `s`.
///
/// The oracle is f(x) = min(x, x ⊕ s), a canonical 2-to-1 function with
/// f(x) = f(x ⊕ s).
#[derive(Debug, Clone)]
pub struct Simon {
    num_inputs: u32,
    period: u64,
}

impl Simon {
    /// Create an instance. The period must be nonzero and fit in the
    /// input register; the 2n-qubit working register must also fit the
    /// simulator cap.
    pub fn new(num_inputs: u32, period: u64) -> AlgoResult<Self> {
        if num_inputs == 0 {
            return Err(AlgoError::EmptyRegister);
        }
        if period == 0
            || num_inputs >= 64
            || period >= 1u64 << num_inputs
            || 2 * num_inputs > kvant_sim::MAX_QUBITS
        {
            return Err(AlgoError::InvalidPeriod { period, num_inputs });
        }
        Ok(Self { num_inputs, period })
    }

    /// The hidden period.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// One quantum query: uniform superposition over the inputs, oracle
    /// as a basis permutation, interference, then measurement of the
    /// input half.
    fn sample_once(&self) -> AlgoResult<u64> {
        let n = self.num_inputs;
        let mut register = Register::new(2 * n)?;
        for q in 0..n {
            register.apply(StandardGate::H, &[q])?;
        }

        // Qubits [0, n) hold x, qubits [n, 2n) hold the output word.
        // XOR-ing f(x) into the output half is an involution, hence a
        // valid basis bijection.
        let period = self.period;
        let input_mask = (1usize << n) - 1;
        register.permute_basis(|i| {
            let x = (i & input_mask) as u64;
            let out = (i >> n) as u64;
            let fx = x.min(x ^ period);
            (((out ^ fx) as usize) << n) | (i & input_mask)
        })?;

        for q in 0..n {
            register.apply(StandardGate::H, &[q])?;
        }

        let mut y = 0u64;
        for q in 0..n {
            y |= u64::from(register.measure(q)?) << q;
        }
        Ok(y)
    }

    /// Collect `count` samples from the quantum subroutine. Every
    /// returned y satisfies y·s ≡ 0 (mod 2); roughly n − 1 independent
    /// ones are needed for the classical solve.
    pub fn collect_samples(&self, count: usize) -> AlgoResult<Vec<u64>> {
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(self.sample_once()?);
        }
        debug!(count, period = self.period, "Collected Simon samples");
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_mod2() {
        assert_eq!(dot_mod2(0b101, 0b101), 0);
        assert_eq!(dot_mod2(0b101, 0b100), 1);
        assert_eq!(dot_mod2(0b111, 0b011), 0);
        assert_eq!(dot_mod2(0, 0b1011), 0);
    }

    #[test]
    fn test_samples_are_orthogonal_to_period() {
        for period in [0b001u64, 0b011, 0b110, 0b111] {
            let simon = Simon::new(3, period).unwrap();
            for y in simon.collect_samples(30).unwrap() {
                assert_eq!(dot_mod2(y, period), 0, "y={y:#b} s={period:#b}");
            }
        }
    }

    #[test]
    fn test_samples_span_the_orthogonal_subspace() {
        // For n=3 the orthogonal subspace of any s has 4 elements, each
        // drawn uniformly; 40 samples miss the nonzero ones with
        // probability (1/4)^40.
        let simon = Simon::new(3, 0b101).unwrap();
        let samples = simon.collect_samples(40).unwrap();
        assert!(samples.iter().any(|&y| y != 0));
    }

    #[test]
    fn test_two_qubit_instance() {
        // n=1, s=1: the only orthogonal y is 0.
        let simon = Simon::new(1, 1).unwrap();
        for y in simon.collect_samples(10).unwrap() {
            assert_eq!(y, 0);
        }
    }

    proptest::proptest! {
        #[test]
        fn dot_mod2_is_linear(a in proptest::num::u64::ANY, b in proptest::num::u64::ANY, c in proptest::num::u64::ANY) {
            proptest::prop_assert_eq!(dot_mod2(a ^ b, c), dot_mod2(a, c) ^ dot_mod2(b, c));
            proptest::prop_assert_eq!(dot_mod2(a, b), dot_mod2(b, a));
        }
    }

    #[test]
    fn test_invalid_periods() {
        assert!(matches!(
            Simon::new(3, 0),
            Err(AlgoError::InvalidPeriod { period: 0, .. })
        ));
        assert!(matches!(
            Simon::new(3, 0b1000),
            Err(AlgoError::InvalidPeriod { .. })
        ));
        assert!(matches!(Simon::new(0, 1), Err(AlgoError::EmptyRegister)));
        // 2n would exceed the register cap.
        assert!(matches!(
            Simon::new(13, 1),
            Err(AlgoError::InvalidPeriod { .. })
        ));
    }
}
