//! Error types for the netlist loader.

use std::io;
use std::path::PathBuf;

use quop_core::SimError;
use thiserror::Error;

/// Errors that can occur while reading, parsing, or replaying a netlist.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TfcError {
    /// Lexer error (invalid character).
    #[error("Lexer error at line {line}: {message}")]
    Lexer { line: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// No `.v` line in the netlist.
    #[error("Netlist has no .v wire declaration")]
    MissingDeclaration,

    /// More than one `.v` line.
    #[error("Duplicate .v declaration at line {line}")]
    DuplicateDeclaration { line: usize },

    /// The same wire name appears twice in `.v`.
    #[error("Wire '{name}' declared twice at line {line}")]
    DuplicateWire { line: usize, name: String },

    /// A gate operand names a wire missing from `.v`.
    #[error("Undeclared wire '{name}' at line {line}")]
    UndeclaredWire { line: usize, name: String },

    /// `t0`: a gate with no target.
    #[error("Gate '{gate}' at line {line} has no target")]
    EmptyGate { line: usize, gate: String },

    /// `t<k>` followed by a different number of operands.
    #[error("Gate '{gate}' at line {line} expects {expected} operands, got {got}")]
    OperandCountMismatch {
        line: usize,
        gate: String,
        expected: usize,
        got: usize,
    },

    /// Recognised but unsupported gate family (Fredkin).
    #[error("Unsupported gate '{gate}' at line {line}: Fredkin gates are not supported")]
    UnsupportedGate { line: usize, gate: String },

    /// The netlist file could not be read.
    #[error("Cannot read netlist '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Engine error while replaying the gates.
    #[error("Circuit error: {0}")]
    Circuit(#[from] SimError),
}

impl TfcError {
    /// Check if the netlist text itself is malformed, as opposed to
    /// unreadable or rejected by the engine.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, TfcError::FileAccess { .. } | TfcError::Circuit(_))
    }
}

/// Result type for netlist operations.
pub type TfcResult<T> = Result<T, TfcError>;
