//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while composing or querying a circuit operator.
///
/// Every operation validates its arguments before touching the running
/// operator or the input state, so an error leaves the simulator unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Register width is zero or past the dense-matrix limit.
    #[error("Qubit count {got} is out of range (expected 1..={max})")]
    InvalidQubitCount {
        /// Requested number of qubits.
        got: usize,
        /// Largest supported register.
        max: usize,
    },

    /// A wire index (or the span of a gate starting at it) does not fit the register.
    #[error("Wire {wire} is not valid for a {num_qubits}-qubit circuit{}", format_gate_context(.gate_name))]
    InvalidWire {
        /// The offending wire.
        wire: usize,
        /// Number of wires in the circuit.
        num_qubits: usize,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Basis input index is not below `2^n`.
    #[error("Input {input} is out of range for a state of dimension {dimension}")]
    InvalidInput {
        /// The requested basis index.
        input: usize,
        /// Size of the state vector.
        dimension: usize,
    },

    /// Custom operator cannot be placed into the circuit.
    #[error("Incompatible operator: {reason}")]
    IncompatibleOperator {
        /// What was wrong with the matrix or its placement.
        reason: String,
    },

    /// A multi-controlled flip listed its own target among the controls.
    #[error("Wire {wire} is used both as control and target")]
    ControlOnTarget {
        /// The wire appearing in both roles.
        wire: usize,
    },

    /// Truth-table derivation found no output amplitude equal to 1.
    #[error("Input {input} does not map to a single basis output; the operator is not logic")]
    NoBasisOutput {
        /// Basis input whose image is not a basis state.
        input: usize,
    },
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for core operations.
pub type SimResult<T> = Result<T, SimError>;
