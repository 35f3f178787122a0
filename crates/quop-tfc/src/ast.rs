//! Parsed form of a netlist, before wire names are resolved.

/// A `t<k>` gate line: `k - 1` controls followed by one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateLine {
    /// 1-based source line.
    pub line: usize,
    /// The `k` of `t<k>`.
    pub arity: usize,
    /// Wire names in source order; the last one is the target.
    pub operands: Vec<String>,
}

impl GateLine {
    /// Get the target wire name.
    pub fn target(&self) -> &str {
        self.operands.last().map_or("", String::as_str)
    }

    /// Get the control wire names.
    pub fn controls(&self) -> &[String] {
        &self.operands[..self.operands.len().saturating_sub(1)]
    }
}

/// A parsed netlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netlist {
    /// Wire names from `.v`; index in this list is the wire index.
    pub wires: Vec<String>,
    /// Gates in application order.
    pub gates: Vec<GateLine>,
}

impl Netlist {
    /// Get the number of declared wires.
    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }
}
