//! Truth tables of reversible logic circuits.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::error::{SimError, SimResult};
use crate::matrix::ONE;
use crate::operator::CircuitOperator;
use crate::state::BasisState;

/// Basis input → basis output mapping of a logic circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    num_qubits: usize,
    outputs: Vec<usize>,
}

impl TruthTable {
    /// Derive the table by feeding every basis input through `operator`.
    ///
    /// The operator is expected to be logic (see
    /// [`CircuitOperator::is_logic`]); that is the caller's contract and is
    /// only logged here. An input whose image has no amplitude exactly
    /// equal to 1 fails with [`SimError::NoBasisOutput`].
    #[instrument(skip(operator), fields(num_qubits = operator.num_qubits()))]
    pub fn derive(operator: &CircuitOperator) -> SimResult<Self> {
        if !operator.is_logic() {
            warn!("Deriving truth table from an operator that is not a permutation");
        }

        let num_qubits = operator.num_qubits();
        let mut input = BasisState::new(num_qubits);
        let mut outputs = Vec::with_capacity(operator.dimension());
        for i in 0..operator.dimension() {
            input.set(i)?;
            let amplitudes = input.evolve(operator.matrix());
            let output = amplitudes
                .iter()
                .position(|&a| a == ONE)
                .ok_or(SimError::NoBasisOutput { input: i })?;
            outputs.push(output);
        }

        Ok(Self {
            num_qubits,
            outputs,
        })
    }

    /// Get the number of wires.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the output for a basis input, if it is in range.
    pub fn output(&self, input: usize) -> Option<usize> {
        self.outputs.get(input).copied()
    }

    /// Get all outputs, indexed by input.
    pub fn outputs(&self) -> &[usize] {
        &self.outputs
    }

    /// Get the number of rows (`2^n`).
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Iterate over `(input, output)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.outputs.iter().copied().enumerate()
    }

    /// Check if every input maps to itself.
    pub fn is_identity(&self) -> bool {
        self.iter().all(|(i, o)| i == o)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.num_qubits;
        for (input, output) in self.iter() {
            writeln!(f, "{input:0width$b}   ==>   {output:0width$b}")?;
        }
        Ok(())
    }
}
