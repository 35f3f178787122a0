//! The seam between gate placement and operator composition.

use crate::error::SimResult;
use crate::matrix::Matrix;

/// Something that can be expanded into a full `2^n × 2^n` operator.
///
/// Contiguous tensor embedding ([`crate::Embedded`]) and bit-mask
/// multi-control synthesis ([`crate::MultiControlled`]) have different
/// preconditions and costs; both stop at this trait so the running product
/// never needs to know which one produced its next factor.
pub trait Placement {
    /// Get the name used in logs and error context.
    fn name(&self) -> &str;

    /// Build the full-size matrix for a register of `num_qubits` wires.
    ///
    /// Fails without side effects if the placement does not fit the register.
    fn expand(&self, num_qubits: usize) -> SimResult<Matrix>;
}
