//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - dense unitary simulator for small quantum and reversible circuits",
        style("quop").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  quop-core  Operator composition engine");
    println!("  quop-tfc   Reversible-logic netlist loader");
    println!("  quop-cli   Command-line interface");
    println!();
    println!(
        "Register limit: {} wires",
        style(quop_core::MAX_QUBITS).bold()
    );
    println!("License:        {}", style("Apache-2.0").dim());
}
