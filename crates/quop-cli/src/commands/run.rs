//! Run command implementation.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use super::common::{bits, load_netlist, print_loaded};
use crate::OutputFormat;

/// One non-zero output amplitude.
#[derive(Debug, Serialize)]
struct AmplitudeEntry {
    index: usize,
    bits: String,
    re: f64,
    im: f64,
}

/// JSON report of a single run.
#[derive(Debug, Serialize)]
struct RunReport {
    num_qubits: usize,
    input: usize,
    input_bits: String,
    is_logic: bool,
    amplitudes: Vec<AmplitudeEntry>,
    /// Probability of reading 1 on each wire, indexed by wire.
    probability_one: Vec<f64>,
}

/// Execute the run command.
pub fn execute(input: &str, basis: usize, format: OutputFormat) -> Result<()> {
    let mut sim = load_netlist(input)?;
    sim.set_input(basis)
        .with_context(|| format!("Invalid basis input {basis}"))?;

    let n = sim.num_qubits();
    let amplitudes = sim
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(_, a)| a.norm_sqr() > 1e-12)
        .map(|(index, a)| AmplitudeEntry {
            index,
            bits: bits(index, n),
            re: a.re,
            im: a.im,
        })
        .collect();
    let probability_one = (0..n)
        .map(|wire| sim.probability_one(wire))
        .collect::<Result<Vec<_>, _>>()?;

    let report = RunReport {
        num_qubits: n,
        input: basis,
        input_bits: bits(basis, n),
        is_logic: sim.is_logic(),
        amplitudes,
        probability_one,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            print_loaded(input, &sim);
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    println!(
        "\n{} Output for input |{}⟩:",
        style("✓").green().bold(),
        report.input_bits
    );
    for entry in &report.amplitudes {
        println!(
            "  |{}⟩  {:>9.5} {:+.5}i",
            style(&entry.bits).cyan(),
            entry.re,
            entry.im
        );
    }

    println!("\n  Wire  P(1)");
    for (wire, p) in report.probability_one.iter().enumerate() {
        println!("  {wire:>4}  {p:.5}");
    }
}
