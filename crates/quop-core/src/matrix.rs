//! Dense complex matrix helpers shared by the placement algorithms.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// A dense complex square matrix.
pub type Matrix = Array2<Complex64>;

/// A dense complex state vector.
pub type StateVector = Array1<Complex64>;

pub(crate) const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Identity matrix of the given dimension.
pub fn identity(dim: usize) -> Matrix {
    Array2::eye(dim)
}

/// Number of wires spanned by a square matrix whose side is a power of two.
///
/// Returns `None` for non-square matrices, empty matrices, and sides that
/// are not powers of two.
pub fn wire_span(matrix: &Matrix) -> Option<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols || !rows.is_power_of_two() {
        return None;
    }
    Some(rows.trailing_zeros() as usize)
}

/// Permutation matrix that maps basis column `i` to row `image(i)`.
///
/// `image` must be a bijection on `0..dim`.
pub(crate) fn permutation(dim: usize, image: impl Fn(usize) -> usize) -> Matrix {
    let mut m = Array2::from_elem((dim, dim), ZERO);
    for col in 0..dim {
        m[[image(col), col]] = ONE;
    }
    m
}

/// Element-wise comparison within an absolute tolerance.
pub fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < tol)
}
