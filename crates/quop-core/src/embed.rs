//! Contiguous tensor-product embedding.
//!
//! A local `2^k × 2^k` matrix acting on wires `w..w+k` becomes
//!
//!   I(2^(n-w-k)) ⊗ M ⊗ I(2^w)
//!
//! in the full space. Wire 0 is the least-significant bit of a basis index,
//! so the identity for the higher wires goes on the left of the product and
//! the identity for the lower wires on the right. Only contiguous operand
//! blocks can be expressed this way; disjoint wires go through
//! [`crate::control`].

use ndarray::linalg::kron;
use tracing::instrument;

use crate::error::{SimError, SimResult};
use crate::matrix::{Matrix, identity, wire_span};
use crate::placement::Placement;

/// A local matrix placed on a contiguous block of wires starting at `wire`.
#[derive(Debug, Clone, Copy)]
pub struct Embedded<'a> {
    local: &'a Matrix,
    wire: usize,
    label: Option<&'a str>,
}

impl<'a> Embedded<'a> {
    /// Place `local` so that its lowest index bit lands on `wire`.
    pub fn new(local: &'a Matrix, wire: usize) -> Self {
        Self {
            local,
            wire,
            label: None,
        }
    }

    /// Attach a gate name for logs and error context.
    #[must_use]
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Get the lowest wire of the block.
    pub fn wire(&self) -> usize {
        self.wire
    }
}

impl Placement for Embedded<'_> {
    fn name(&self) -> &str {
        self.label.unwrap_or("custom")
    }

    fn expand(&self, num_qubits: usize) -> SimResult<Matrix> {
        embed(self.local, self.wire, num_qubits).map_err(|e| match e {
            SimError::InvalidWire {
                wire, num_qubits, ..
            } => SimError::InvalidWire {
                wire,
                num_qubits,
                gate_name: Some(self.name().to_string()),
            },
            other => other,
        })
    }
}

/// Embed `local` at `wire` into the operator space of `num_qubits` wires.
///
/// Fails with [`SimError::IncompatibleOperator`] if `local` is not a square
/// power-of-two matrix, and with [`SimError::InvalidWire`] if the block
/// `wire..wire+k` does not fit inside the register.
#[instrument(level = "trace", skip(local), fields(dim = local.nrows()))]
pub fn embed(local: &Matrix, wire: usize, num_qubits: usize) -> SimResult<Matrix> {
    let span = wire_span(local).ok_or_else(|| SimError::IncompatibleOperator {
        reason: format!(
            "local matrix of shape {:?} is not square with a power-of-two side",
            local.dim()
        ),
    })?;

    if wire >= num_qubits || wire + span > num_qubits {
        return Err(SimError::InvalidWire {
            wire,
            num_qubits,
            gate_name: None,
        });
    }

    let high = identity(1 << (num_qubits - wire - span));
    let low = identity(1 << wire);
    Ok(kron(&kron(&high, local), &low))
}
