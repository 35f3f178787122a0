//! Dense Unitary Circuit Simulator
//!
//! `quop-core` simulates small quantum and reversible-logic circuits by
//! composing every gate into one dense `2^n × 2^n` complex operator and
//! evolving a single basis-state input through it.
//!
//! # Core Components
//!
//! - **Gates**: [`StandardGate`] yields the fixed local matrix of each named gate
//! - **Embedding**: [`Embedded`] places a local matrix on a contiguous wire block
//!   via `I ⊗ M ⊗ I`
//! - **Multi-control**: [`MultiControlled`] writes the permutation of a bit flip
//!   controlled by any set of wires
//! - **Operator**: [`CircuitOperator`] holds the running product, one
//!   [`Placement`] at a time
//! - **State**: [`BasisState`] is the one-hot input; amplitudes are
//!   `operator × state`
//! - **Truth tables**: [`TruthTable`] maps every basis input of a logic circuit
//!   to its output
//! - **Simulator**: [`Simulator`] bundles all of the above behind one API
//!
//! Wire 0 is the least-significant bit of a basis index.
//!
//! # Example: Toffoli from a multi-controlled flip
//!
//! ```rust
//! use quop_core::Simulator;
//!
//! let mut sim = Simulator::new(3).unwrap();
//! sim.multi_control(2, &[0, 1]).unwrap();
//!
//! let table = sim.truth_table().unwrap();
//! assert_eq!(table.output(3), Some(7));
//! assert_eq!(table.output(5), Some(5));
//! ```
//!
//! # Example: Superposition
//!
//! ```rust
//! use quop_core::Simulator;
//!
//! let mut sim = Simulator::new(1).unwrap();
//! sim.hadamard(0).unwrap();
//!
//! let p = sim.probability_one(0).unwrap();
//! assert!((p - 0.5).abs() < 1e-9);
//! ```
//!
//! # Scaling
//!
//! Both the operator and each multi-control factor are materialised densely,
//! so memory and time grow as `4^n`:
//!
//! | Qubits | Operator size |
//! |--------|---------------|
//! | 4 | 4 KB |
//! | 8 | 1 MB |
//! | 10 | 16 MB |
//! | 12 | 256 MB |
//! | 14 | 4 GB |
//!
//! Registers wider than [`MAX_QUBITS`] are rejected.

pub mod control;
pub mod embed;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod operator;
pub mod placement;
pub mod simulator;
pub mod state;
pub mod truth_table;

pub use control::MultiControlled;
pub use embed::Embedded;
pub use error::{SimError, SimResult};
pub use gate::StandardGate;
pub use matrix::{Matrix, StateVector};
pub use operator::{CircuitOperator, MAX_QUBITS, compose};
pub use placement::Placement;
pub use simulator::Simulator;
pub use state::{BasisState, Squaring};
pub use truth_table::TruthTable;
