//! Client-facing circuit simulator.

use num_complex::Complex64;
use tracing::debug;

use crate::control::MultiControlled;
use crate::embed::Embedded;
use crate::error::{SimError, SimResult};
use crate::gate::StandardGate;
use crate::matrix::{Matrix, StateVector, wire_span};
use crate::operator::CircuitOperator;
use crate::state::{self, BasisState, Squaring};
use crate::truth_table::TruthTable;

/// A circuit over `n` wires, represented by its dense composed operator,
/// together with a single basis-state input.
///
/// Gate methods left-multiply a full-size gate matrix into the running
/// operator. Every method validates before mutating, so an `Err` leaves both
/// the operator and the input untouched.
#[derive(Debug, Clone)]
pub struct Simulator {
    operator: CircuitOperator,
    state: BasisState,
}

impl Simulator {
    /// Create a simulator with the identity operator and input `|0...0⟩`.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        let operator = CircuitOperator::identity(num_qubits)?;
        Ok(Self {
            state: BasisState::new(num_qubits),
            operator,
        })
    }

    /// Create a simulator from an already composed operator with input `|0...0⟩`.
    pub fn from_operator(matrix: Matrix) -> SimResult<Self> {
        let operator = CircuitOperator::from_matrix(matrix)?;
        Ok(Self {
            state: BasisState::new(operator.num_qubits()),
            operator,
        })
    }

    /// Get the number of wires.
    pub fn num_qubits(&self) -> usize {
        self.operator.num_qubits()
    }

    /// Get the current input state.
    pub fn state(&self) -> &BasisState {
        &self.state
    }

    /// Get the composed operator matrix.
    pub fn operator(&self) -> &Matrix {
        self.operator.matrix()
    }

    /// Get the composed operator.
    pub fn circuit_operator(&self) -> &CircuitOperator {
        &self.operator
    }

    /// Set the basis input `|index⟩`. The operator is not touched.
    pub fn set_input(&mut self, index: usize) -> SimResult<&mut Self> {
        self.state.set(index)?;
        Ok(self)
    }

    // =========================================================================
    // Gate application
    // =========================================================================

    /// Apply a built-in gate whose block starts at `wire`.
    pub fn apply_gate(&mut self, gate: StandardGate, wire: usize) -> SimResult<&mut Self> {
        let local = gate.matrix();
        self.operator
            .apply(&Embedded::new(&local, wire).with_label(gate.name()))?;
        debug!(gate = %gate, wire, "Applied gate");
        Ok(self)
    }

    /// Apply a bit flip on `target` controlled by every wire in `controls`.
    pub fn multi_control(&mut self, target: usize, controls: &[usize]) -> SimResult<&mut Self> {
        self.operator
            .apply(&MultiControlled::new(target, controls))?;
        debug!(target_wire = target, ?controls, "Applied multi-controlled flip");
        Ok(self)
    }

    /// Apply an arbitrary square power-of-two matrix on wires `wire..wire+k`.
    ///
    /// Also used to embed a previously composed sub-circuit at an offset.
    pub fn apply_custom_operator(&mut self, op: &Matrix, wire: usize) -> SimResult<&mut Self> {
        let num_qubits = self.num_qubits();
        if wire >= num_qubits {
            return Err(SimError::InvalidWire {
                wire,
                num_qubits,
                gate_name: Some("custom".to_string()),
            });
        }
        let span = wire_span(op).ok_or_else(|| SimError::IncompatibleOperator {
            reason: format!(
                "matrix of shape {:?} is not square with a power-of-two side",
                op.dim()
            ),
        })?;
        if op.nrows() > self.operator.dimension() || span > num_qubits - wire {
            return Err(SimError::IncompatibleOperator {
                reason: format!(
                    "{span}-wire operator does not fit at wire {wire} of a {num_qubits}-wire circuit"
                ),
            });
        }
        self.operator
            .apply(&Embedded::new(op, wire).with_label("custom"))?;
        debug!(wire, span, "Applied custom operator");
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn hadamard(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::H, wire)
    }

    /// Apply Pauli-X gate.
    pub fn pauli_x(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::X, wire)
    }

    /// Apply Pauli-Y gate.
    pub fn pauli_y(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Y, wire)
    }

    /// Apply Pauli-Z gate.
    pub fn pauli_z(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Z, wire)
    }

    /// Apply S gate.
    pub fn s(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::S, wire)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Sdg, wire)
    }

    /// Apply T gate.
    pub fn t(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::T, wire)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Tdg, wire)
    }

    /// Apply RX rotation (radians).
    pub fn rx(&mut self, wire: usize, angle: f64) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Rx(angle), wire)
    }

    /// Apply RY rotation (radians).
    pub fn ry(&mut self, wire: usize, angle: f64) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Ry(angle), wire)
    }

    /// Apply RZ rotation (radians).
    pub fn rz(&mut self, wire: usize, angle: f64) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Rz(angle), wire)
    }

    /// Apply `RX(π/2)`.
    pub fn x90(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::X90, wire)
    }

    /// Apply `RX(-π/2)`.
    pub fn mx90(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::MX90, wire)
    }

    /// Apply `RY(π/2)`.
    pub fn y90(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Y90, wire)
    }

    /// Apply `RY(-π/2)`.
    pub fn my90(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::MY90, wire)
    }

    /// Apply CZ on wires `wire`, `wire + 1`.
    pub fn cz(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::CZ, wire)
    }

    /// Apply CNOT on wires `wire`, `wire + 1`.
    ///
    /// Within the block the higher wire is the control and `wire` the target.
    pub fn cnot(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::CX, wire)
    }

    /// Apply SWAP on wires `wire`, `wire + 1`.
    pub fn swap(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::Swap, wire)
    }

    /// Apply controlled phase `e^{iθ}` on wires `wire`, `wire + 1`.
    pub fn cr(&mut self, wire: usize, angle: f64) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::CR(angle), wire)
    }

    /// Apply controlled phase `e^{iπ/2^k}` on wires `wire`, `wire + 1`.
    pub fn crk(&mut self, wire: usize, k: i32) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::CRk(k), wire)
    }

    /// Apply Toffoli on wires `wire..wire + 3`.
    ///
    /// Within the block the two higher wires are the controls.
    pub fn toffoli(&mut self, wire: usize) -> SimResult<&mut Self> {
        self.apply_gate(StandardGate::CCX, wire)
    }

    // =========================================================================
    // Read-only queries
    // =========================================================================

    /// Get `operator × state`.
    pub fn amplitudes(&self) -> StateVector {
        self.state.evolve(self.operator.matrix())
    }

    /// Probability that `wire` reads 1, summed from `|a|²`.
    pub fn probability_one(&self, wire: usize) -> SimResult<f64> {
        self.probability_one_with(wire, Squaring::Magnitude)
            .map(|p| p.re)
    }

    /// Probability that `wire` reads 1 under an explicit squaring convention.
    pub fn probability_one_with(&self, wire: usize, squaring: Squaring) -> SimResult<Complex64> {
        let num_qubits = self.num_qubits();
        if wire >= num_qubits {
            return Err(SimError::InvalidWire {
                wire,
                num_qubits,
                gate_name: None,
            });
        }
        Ok(state::probability_one(&self.amplitudes(), wire, squaring))
    }

    /// Derive the truth table. The input state is left unchanged.
    pub fn truth_table(&self) -> SimResult<TruthTable> {
        TruthTable::derive(&self.operator)
    }

    /// Check whether the composed operator is a 0/1 permutation.
    pub fn is_logic(&self) -> bool {
        self.operator.is_logic()
    }

    /// Check whether the composed operator is unitary within `tol`.
    pub fn is_unitary(&self, tol: f64) -> bool {
        self.operator.is_unitary(tol)
    }
}
