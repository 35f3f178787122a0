//! Reversible-logic netlist (`.tfc`) loader for quop
//!
//! Reads RevLib-style `.tfc` files into a [`quop_core::Simulator`]. Only the
//! Toffoli family is supported: `t1` is a NOT, `t2` a CNOT, `t<k>` a flip of
//! the last operand controlled by the other `k - 1`.
//!
//! ```text
//! # 3-bit majority helper
//! .v a,b,c
//! .i a,b,c
//! .o a,b,c
//! BEGIN
//! t2 a,b
//! t3 a,b,c
//! END
//! ```
//!
//! Wire names are assigned indices in `.v` order, so the first name is wire 0
//! (the least significant bit of a basis index). `.i`, `.o`, `.c`, `.ol` and
//! other directives are accepted and ignored, as are `BEGIN`/`END`.
//!
//! # Example
//!
//! ```rust
//! use quop_tfc::load;
//!
//! let sim = load(".v a,b,c\nt3 a,b,c\n").unwrap();
//! let table = sim.truth_table().unwrap();
//! assert_eq!(table.output(0b011), Some(0b111));
//! assert_eq!(table.output(0b001), Some(0b001));
//! ```
//!
//! # Sub-circuits
//!
//! A loaded netlist's composed operator can be embedded into a larger
//! simulator at a wire offset through [`LoadModule`].

pub mod ast;
pub mod error;
pub mod lexer;
pub mod lowering;
pub mod parser;

use std::fs;
use std::path::Path;

use quop_core::Simulator;
use tracing::debug;

pub use ast::{GateLine, Netlist};
pub use error::{TfcError, TfcResult};
pub use lowering::lower;
pub use parser::parse;

/// Parse a netlist and replay it onto a new simulator.
pub fn load(source: &str) -> TfcResult<Simulator> {
    let netlist = parse(source)?;
    lower(&netlist)
}

/// Read, parse and replay a netlist file.
pub fn load_file(path: impl AsRef<Path>) -> TfcResult<Simulator> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| TfcError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "Read netlist");
    load(&source)
}

/// Embed a netlist file as a sub-circuit.
pub trait LoadModule {
    /// Load the netlist at `path` and apply its composed operator on wires
    /// `wire..wire + k`, where `k` is the module's wire count.
    fn load_module(&mut self, path: impl AsRef<Path>, wire: usize) -> TfcResult<()>;
}

impl LoadModule for Simulator {
    fn load_module(&mut self, path: impl AsRef<Path>, wire: usize) -> TfcResult<()> {
        let module = load_file(path)?;
        self.apply_custom_operator(module.operator(), wire)?;
        Ok(())
    }
}
