//! Single-qubit state with derived Bloch-sphere quantities.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::complex::EPSILON;
use crate::error::{SimError, SimResult};

/// A normalized two-amplitude quantum state.
///
/// Construction is strict: [`QubitState::new`] rejects amplitude pairs
/// whose squared magnitudes do not sum to 1 within [`EPSILON`]. The
/// lenient path is explicit — [`QubitState::rescaled`] divides by the
/// norm first and only fails for the zero vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitState {
    /// Amplitude of |0⟩.
    alpha: Complex64,
    /// Amplitude of |1⟩.
    beta: Complex64,
}

impl QubitState {
    /// Create a state from explicit amplitudes.
    ///
    /// Fails with [`SimError::NotNormalized`] unless |α|² + |β|² = 1
    /// within tolerance.
    pub fn new(alpha: Complex64, beta: Complex64) -> SimResult<Self> {
        let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
        if (norm_sqr - 1.0).abs() > EPSILON {
            return Err(SimError::NotNormalized { norm_sqr });
        }
        Ok(Self { alpha, beta })
    }

    /// Create a state from arbitrary amplitudes, rescaling to unit norm.
    ///
    /// Fails with [`SimError::DivisionByZero`] for the zero vector.
    pub fn rescaled(alpha: Complex64, beta: Complex64) -> SimResult<Self> {
        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if norm == 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(Self {
            alpha: alpha / norm,
            beta: beta / norm,
        })
    }

    /// The |0⟩ state.
    pub fn zero() -> Self {
        Self {
            alpha: Complex64::new(1.0, 0.0),
            beta: Complex64::new(0.0, 0.0),
        }
    }

    /// The |1⟩ state.
    pub fn one() -> Self {
        Self {
            alpha: Complex64::new(0.0, 0.0),
            beta: Complex64::new(1.0, 0.0),
        }
    }

    /// The |+⟩ state, (|0⟩ + |1⟩)/√2.
    pub fn plus() -> Self {
        Self {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(FRAC_1_SQRT_2, 0.0),
        }
    }

    /// The |−⟩ state, (|0⟩ − |1⟩)/√2.
    pub fn minus() -> Self {
        Self {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(-FRAC_1_SQRT_2, 0.0),
        }
    }

    /// The |i⟩ state, (|0⟩ + i|1⟩)/√2.
    pub fn plus_i() -> Self {
        Self {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(0.0, FRAC_1_SQRT_2),
        }
    }

    /// The |−i⟩ state, (|0⟩ − i|1⟩)/√2.
    pub fn minus_i() -> Self {
        Self {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(0.0, -FRAC_1_SQRT_2),
        }
    }

    /// Create a state from Bloch-sphere angles: α = cos(θ/2),
    /// β = e^{iφ} sin(θ/2).
    pub fn from_bloch(theta: f64, phi: f64) -> Self {
        Self {
            alpha: Complex64::new((theta / 2.0).cos(), 0.0),
            beta: Complex64::from_polar((theta / 2.0).sin(), phi),
        }
    }

    /// Amplitude of |0⟩.
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩.
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Probability of measuring 0.
    pub fn prob_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probability of measuring 1.
    pub fn prob_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Apply a 2×2 unitary, returning the transformed state.
    pub fn transformed(&self, matrix: [[Complex64; 2]; 2]) -> Self {
        Self {
            alpha: matrix[0][0] * self.alpha + matrix[0][1] * self.beta,
            beta: matrix[1][0] * self.alpha + matrix[1][1] * self.beta,
        }
    }

    /// Sample one measurement outcome (0 or 1).
    ///
    /// Each call models an independent re-preparation of the state; the
    /// state itself is not collapsed.
    pub fn measure(&self) -> u8 {
        let r: f64 = rand::thread_rng().r#gen();
        u8::from(r >= self.prob_zero())
    }

    /// Sample `count` independent outcomes, returning `[zeros, ones]`.
    pub fn measure_multiple(&self, count: u64) -> [u64; 2] {
        let p0 = self.prob_zero();
        let mut rng = rand::thread_rng();
        let mut histogram = [0u64; 2];
        for _ in 0..count {
            let r: f64 = rng.r#gen();
            histogram[usize::from(r >= p0)] += 1;
        }
        histogram
    }

    /// Bloch-sphere coordinates (x, y, z) of this state.
    pub fn bloch_coordinates(&self) -> (f64, f64, f64) {
        let cross = self.alpha.conj() * self.beta;
        let x = 2.0 * cross.re;
        let y = 2.0 * cross.im;
        let z = self.prob_zero() - self.prob_one();
        (x, y, z)
    }

    /// Shannon entropy of the measurement distribution in bits.
    ///
    /// Zero at the poles (either probability 0).
    pub fn entropy(&self) -> f64 {
        let term = |p: f64| if p > 0.0 { -p * p.log2() } else { 0.0 };
        term(self.prob_zero()) + term(self.prob_one())
    }

    /// Purity of the state, tr(ρ²). Identically 1 for a pure state;
    /// provided as a numerical consistency check.
    pub fn purity(&self) -> f64 {
        let p0 = self.prob_zero();
        let p1 = self.prob_one();
        let coherence = (self.alpha * self.beta.conj()).norm_sqr();
        p0 * p0 + p1 * p1 + 2.0 * coherence
    }
}
