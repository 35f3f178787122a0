//! Multi-controlled bit flips over arbitrary wire sets.
//!
//! Tensor embedding cannot express gates whose operands are scattered
//! across the register, so the full permutation is written down directly:
//! column `i` maps to `i ^ (1 << target)` when every control bit of `i` is
//! set, and to itself otherwise. Time and memory are O(4^n).

use tracing::instrument;

use crate::error::{SimError, SimResult};
use crate::matrix::{Matrix, permutation};
use crate::placement::Placement;

/// A bit flip on `target` conditioned on every wire in `controls` being 1.
///
/// With no controls this is a plain Pauli-X. Controls may be listed in any
/// order and need not be adjacent to each other or to the target.
#[derive(Debug, Clone, Copy)]
pub struct MultiControlled<'a> {
    target: usize,
    controls: &'a [usize],
}

impl<'a> MultiControlled<'a> {
    /// Create a multi-controlled flip.
    pub fn new(target: usize, controls: &'a [usize]) -> Self {
        Self { target, controls }
    }

    /// Get the target wire.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Get the control wires.
    pub fn controls(&self) -> &[usize] {
        self.controls
    }
}

impl Placement for MultiControlled<'_> {
    fn name(&self) -> &str {
        "mct"
    }

    fn expand(&self, num_qubits: usize) -> SimResult<Matrix> {
        synthesize(self.target, self.controls, num_qubits)
    }
}

/// Bit mask with one bit set per control wire.
///
/// Repeated controls are harmless. Every wire must be below
/// `usize::BITS`; [`synthesize`] checks them against the register first.
pub(crate) fn control_mask(controls: &[usize]) -> usize {
    controls.iter().fold(0_usize, |mask, &c| mask | (1 << c))
}

/// Build the full permutation matrix of a multi-controlled flip.
#[instrument(level = "trace")]
pub fn synthesize(target: usize, controls: &[usize], num_qubits: usize) -> SimResult<Matrix> {
    for &wire in std::iter::once(&target).chain(controls) {
        if wire >= num_qubits {
            return Err(SimError::InvalidWire {
                wire,
                num_qubits,
                gate_name: Some("mct".to_string()),
            });
        }
    }
    if controls.contains(&target) {
        return Err(SimError::ControlOnTarget { wire: target });
    }

    let mask = control_mask(controls);
    let flip = 1_usize << target;
    Ok(permutation(1 << num_qubits, |i| {
        if i & mask == mask { i ^ flip } else { i }
    }))
}
