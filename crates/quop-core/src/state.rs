//! Basis-state inputs and the amplitudes they produce.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::matrix::{Matrix, ONE, StateVector, ZERO};
use crate::operator::check_qubit_count;

/// How an amplitude is squared when summing a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Squaring {
    /// `|a|²`: the physical probability, always real and non-negative.
    #[default]
    Magnitude,
    /// `a²` of the complex amplitude itself.
    ///
    /// Agrees with [`Squaring::Magnitude`] for real amplitudes only. Phase
    /// gates (Y, S, T, Rz, CR, …) make it complex or negative.
    Amplitude,
}

/// A one-hot input state `|index⟩`.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisState {
    num_qubits: usize,
    index: usize,
    vector: StateVector,
}

impl BasisState {
    /// Create `|0...0⟩` on `num_qubits` wires, already checked against
    /// [`crate::MAX_QUBITS`].
    pub(crate) fn new(num_qubits: usize) -> Self {
        let mut vector = StateVector::from_elem(1 << num_qubits, ZERO);
        vector[0] = ONE;
        Self {
            num_qubits,
            index: 0,
            vector,
        }
    }

    /// Create `|index⟩`, failing if the register width is out of range or
    /// `index >= 2^n`.
    pub fn with_index(num_qubits: usize, index: usize) -> SimResult<Self> {
        check_qubit_count(num_qubits)?;
        let mut state = Self::new(num_qubits);
        state.set(index)?;
        Ok(state)
    }

    /// Replace the state with `|index⟩`.
    ///
    /// On failure the previous state is kept.
    pub fn set(&mut self, index: usize) -> SimResult<()> {
        let dimension = self.dimension();
        if index >= dimension {
            return Err(SimError::InvalidInput {
                input: index,
                dimension,
            });
        }
        self.vector[self.index] = ZERO;
        self.vector[index] = ONE;
        self.index = index;
        Ok(())
    }

    /// Get the basis index currently set.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the number of wires.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state vector length `2^n`.
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }

    /// Get the state vector.
    pub fn vector(&self) -> &StateVector {
        &self.vector
    }

    /// Apply `operator` to this state: `operator × |index⟩`.
    pub fn evolve(&self, operator: &Matrix) -> StateVector {
        operator.dot(&self.vector)
    }

    /// Render the index as an n-bit string, most-significant wire first.
    pub fn bitstring(&self) -> String {
        format!("{:0width$b}", self.index, width = self.num_qubits)
    }
}

/// Sum the squared amplitudes of every basis index whose bit `wire` is set.
///
/// Each term is rounded to 5 decimal places before summing. `wire` must
/// already have been checked against the register width.
pub fn probability_one(amplitudes: &StateVector, wire: usize, squaring: Squaring) -> Complex64 {
    let mask = 1_usize << wire;
    amplitudes
        .iter()
        .enumerate()
        .filter(|(i, _)| i & mask != 0)
        .map(|(_, &a)| match squaring {
            Squaring::Magnitude => Complex64::new(round5(a.norm_sqr()), 0.0),
            Squaring::Amplitude => {
                let sq = a * a;
                Complex64::new(round5(sq.re), round5(sq.im))
            }
        })
        .sum()
}

fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_initial_state() {
        let s = BasisState::new(2);
        assert_eq!(s.index(), 0);
        assert_eq!(s.dimension(), 4);
        assert_eq!(s.vector()[0], ONE);
        assert_eq!(s.vector().iter().filter(|&&v| v == ONE).count(), 1);
    }

    #[test]
    fn test_set_moves_the_one() {
        let mut s = BasisState::new(3);
        s.set(5).unwrap();
        assert_eq!(s.index(), 5);
        assert_eq!(s.vector()[5], ONE);
        assert_eq!(s.vector()[0], ZERO);
        assert_eq!(s.vector().iter().filter(|&&v| v != ZERO).count(), 1);
        assert_eq!(s.bitstring(), "101");
    }

    #[test]
    fn test_set_out_of_range_keeps_state() {
        let mut s = BasisState::with_index(2, 3).unwrap();
        let err = s.set(4).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidInput {
                input: 4,
                dimension: 4
            }
        ));
        assert_eq!(s.index(), 3);
        assert_eq!(s.vector()[3], ONE);
    }

    #[test]
    fn test_with_index_rejects_bad_widths() {
        assert!(matches!(
            BasisState::with_index(0, 0),
            Err(SimError::InvalidQubitCount { got: 0, .. })
        ));
        assert!(matches!(
            BasisState::with_index(64, 0),
            Err(SimError::InvalidQubitCount { got: 64, .. })
        ));
        assert_eq!(BasisState::with_index(3, 6).unwrap().bitstring(), "110");
    }

    #[test]
    fn test_probability_one_magnitude() {
        let h = FRAC_1_SQRT_2;
        let amps = StateVector::from(vec![
            Complex64::new(h, 0.0),
            Complex64::new(0.0, h),
        ]);
        let p = probability_one(&amps, 0, Squaring::Magnitude);
        assert!((p.re - 0.5).abs() < 1e-12);
        assert_eq!(p.im, 0.0);
    }

    #[test]
    fn test_probability_one_amplitude_diverges_for_imaginary() {
        let h = FRAC_1_SQRT_2;
        let amps = StateVector::from(vec![
            Complex64::new(h, 0.0),
            Complex64::new(0.0, h),
        ]);
        // (i/√2)² = -1/2
        let p = probability_one(&amps, 0, Squaring::Amplitude);
        assert!((p.re + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probability_terms_are_rounded() {
        let amps = StateVector::from(vec![
            ZERO,
            Complex64::new(0.123_456_7, 0.0),
        ]);
        let p = probability_one(&amps, 0, Squaring::Magnitude);
        // 0.0152415... rounds to 0.01524
        assert_eq!(p.re, 0.01524);
    }
}
