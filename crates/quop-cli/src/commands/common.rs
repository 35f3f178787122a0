//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use quop_core::Simulator;

/// Load a netlist file into a simulator.
pub fn load_netlist(path: &str) -> Result<Simulator> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    quop_tfc::load_file(path).with_context(|| format!("Failed to load netlist: {path}"))
}

/// Print the one-line header shown before table output.
pub fn print_loaded(path: &str, sim: &Simulator) {
    println!(
        "{} Loaded {} ({} wires)",
        style("→").cyan().bold(),
        style(path).green(),
        sim.num_qubits()
    );
}

/// Render a basis index as an n-bit string, most significant wire first.
pub fn bits(index: usize, width: usize) -> String {
    format!("{index:0width$b}")
}
