//! Truth-table command implementation.

use anyhow::{Context, Result};
use console::style;

use super::common::{load_netlist, print_loaded};
use crate::OutputFormat;

/// Execute the truth-table command.
pub fn execute(input: &str, format: OutputFormat) -> Result<()> {
    let sim = load_netlist(input)?;
    if !sim.is_logic() {
        anyhow::bail!("{input} is not a reversible logic circuit");
    }
    let table = sim
        .truth_table()
        .context("Failed to derive truth table")?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&table)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            print_loaded(input, &sim);
            println!(
                "\n{} Truth table ({} rows):",
                style("✓").green().bold(),
                table.len()
            );
            print!("{table}");
            if table.is_identity() {
                println!("{}", style("  (identity)").dim());
            }
        }
    }

    Ok(())
}
