//! Built-in gate library.
//!
//! Every [`StandardGate`] produces a fixed local matrix of size `2^k × 2^k`.
//! Multi-wire gates assume a contiguous block of wires `w..w+k`, with the
//! lowest row/column bit belonging to wire `w`.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

use ndarray::arr2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix, ONE, ZERO, identity, permutation};

/// Gates with a known fixed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit gates
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Single-qubit rotations
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// `Rx(π/2)`.
    X90,
    /// `Rx(-π/2)`.
    MX90,
    /// `Ry(π/2)`.
    Y90,
    /// `Ry(-π/2)`.
    MY90,

    // Two-qubit gates
    /// Controlled-Z gate.
    CZ,
    /// Controlled-X (CNOT) gate.
    CX,
    /// SWAP gate.
    Swap,
    /// Controlled phase `diag(1, 1, 1, e^{iθ})`.
    CR(f64),
    /// Controlled phase with angle `π / 2^k`.
    CRk(i32),

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::X90 => "x90",
            StandardGate::MX90 => "mx90",
            StandardGate::Y90 => "y90",
            StandardGate::MY90 => "my90",
            StandardGate::CZ => "cz",
            StandardGate::CX => "cx",
            StandardGate::Swap => "swap",
            StandardGate::CR(_) => "cr",
            StandardGate::CRk(_) => "crk",
            StandardGate::CCX => "ccx",
        }
    }

    /// Get the number of contiguous wires this gate spans.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            StandardGate::H
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::X90
            | StandardGate::MX90
            | StandardGate::Y90
            | StandardGate::MY90 => 1,

            StandardGate::CZ
            | StandardGate::CX
            | StandardGate::Swap
            | StandardGate::CR(_)
            | StandardGate::CRk(_) => 2,

            StandardGate::CCX => 3,
        }
    }

    /// Check whether applying this gate twice yields the identity.
    pub fn is_self_inverse(&self) -> bool {
        matches!(
            self,
            StandardGate::H
                | StandardGate::X
                | StandardGate::Y
                | StandardGate::Z
                | StandardGate::CZ
                | StandardGate::CX
                | StandardGate::Swap
                | StandardGate::CCX
        )
    }

    /// Build the local matrix of this gate.
    pub fn matrix(&self) -> Matrix {
        match *self {
            StandardGate::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                arr2(&[[s, s], [s, -s]])
            }
            StandardGate::X => arr2(&[[ZERO, ONE], [ONE, ZERO]]),
            StandardGate::Y => {
                let i = Complex64::i();
                arr2(&[[ZERO, -i], [i, ZERO]])
            }
            StandardGate::Z => arr2(&[[ONE, ZERO], [ZERO, -ONE]]),
            StandardGate::S => phase(FRAC_PI_2),
            StandardGate::Sdg => phase(-FRAC_PI_2),
            StandardGate::T => phase(FRAC_PI_4),
            StandardGate::Tdg => phase(-FRAC_PI_4),
            StandardGate::Rx(theta) => rx(theta),
            StandardGate::Ry(theta) => ry(theta),
            StandardGate::Rz(theta) => {
                let p0 = Complex64::from_polar(1.0, -theta / 2.0);
                let p1 = Complex64::from_polar(1.0, theta / 2.0);
                arr2(&[[p0, ZERO], [ZERO, p1]])
            }
            StandardGate::X90 => rx(FRAC_PI_2),
            StandardGate::MX90 => rx(-FRAC_PI_2),
            StandardGate::Y90 => ry(FRAC_PI_2),
            StandardGate::MY90 => ry(-FRAC_PI_2),
            StandardGate::CZ => {
                let mut m = identity(4);
                m[[3, 3]] = -ONE;
                m
            }
            // |11> <-> |10> in the block's row order.
            StandardGate::CX => permutation(4, |i| if i >= 2 { i ^ 1 } else { i }),
            StandardGate::Swap => permutation(4, |i| match i {
                1 => 2,
                2 => 1,
                other => other,
            }),
            StandardGate::CR(theta) => controlled_phase(theta),
            StandardGate::CRk(k) => controlled_phase(PI / 2.0_f64.powi(k)),
            StandardGate::CCX => permutation(8, |i| if i >= 6 { i ^ 1 } else { i }),
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandardGate::Rx(theta)
            | StandardGate::Ry(theta)
            | StandardGate::Rz(theta)
            | StandardGate::CR(theta) => write!(f, "{}({theta})", self.name()),
            StandardGate::CRk(k) => write!(f, "{}({k})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

fn phase(theta: f64) -> Matrix {
    arr2(&[[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]])
}

fn rx(theta: f64) -> Matrix {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
    arr2(&[[c, neg_i_s], [neg_i_s, c]])
}

fn ry(theta: f64) -> Matrix {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    arr2(&[[c, -s], [s, c]])
}

fn controlled_phase(theta: f64) -> Matrix {
    let mut m = identity(4);
    m[[3, 3]] = Complex64::from_polar(1.0, theta);
    m
}
