//! The running composed operator of a circuit.

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::matrix::{Matrix, ONE, ZERO, approx_eq, identity, wire_span};
use crate::placement::Placement;

/// Largest register the dense representation accepts.
///
/// The operator and every multi-control factor hold `4^n` complex entries;
/// at 14 wires that is already 4 GiB per matrix.
pub const MAX_QUBITS: usize = 14;

/// Left-multiply `gate` into `current`: returns `gate × current`.
///
/// Gates are applied to the state in call order, so the most recent gate is
/// the leftmost factor of the product.
pub fn compose(gate: &Matrix, current: &Matrix) -> Matrix {
    gate.dot(current)
}

/// A `2^n × 2^n` unitary accumulated gate by gate.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitOperator {
    num_qubits: usize,
    matrix: Matrix,
}

impl CircuitOperator {
    /// Create the identity operator on `num_qubits` wires.
    pub fn identity(num_qubits: usize) -> SimResult<Self> {
        check_qubit_count(num_qubits)?;
        Ok(Self {
            num_qubits,
            matrix: identity(1 << num_qubits),
        })
    }

    /// Wrap an already composed operator, e.g. one loaded from a sub-circuit.
    pub fn from_matrix(matrix: Matrix) -> SimResult<Self> {
        let num_qubits = wire_span(&matrix).ok_or_else(|| SimError::IncompatibleOperator {
            reason: format!(
                "operator of shape {:?} is not square with a power-of-two side",
                matrix.dim()
            ),
        })?;
        check_qubit_count(num_qubits)?;
        Ok(Self { num_qubits, matrix })
    }

    /// Get the number of wires.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the side length `2^n`.
    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    /// Get the composed matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Consume the operator and return its matrix.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Expand `placement` and fold it into the running product.
    ///
    /// The running product is only replaced once expansion has succeeded.
    pub fn apply(&mut self, placement: &impl Placement) -> SimResult<()> {
        let full = placement.expand(self.num_qubits)?;
        debug!(
            gate = placement.name(),
            dim = full.nrows(),
            "Composing gate into operator"
        );
        self.matrix = compose(&full, &self.matrix);
        Ok(())
    }

    /// Check whether every entry is exactly 0 or exactly 1.
    ///
    /// A unitary with this property is a permutation matrix, i.e. the
    /// circuit is a reversible logic circuit with a well-defined truth table.
    pub fn is_logic(&self) -> bool {
        self.matrix.iter().all(|&v| v == ZERO || v == ONE)
    }

    /// Check `U†U ≈ I` entry-wise within `tol`.
    ///
    /// Gate matrices are never verified implicitly; this is an opt-in check.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let adjoint = self.matrix.t().mapv(|v| v.conj());
        approx_eq(&adjoint.dot(&self.matrix), &identity(self.dimension()), tol)
    }
}

pub(crate) fn check_qubit_count(num_qubits: usize) -> SimResult<()> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(SimError::InvalidQubitCount {
            got: num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}
