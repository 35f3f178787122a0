//! quop Command-Line Interface
//!
//! Loads reversible-logic netlists into the dense operator simulator and
//! reports amplitudes, wire probabilities and truth tables.
//!
//! ```text
//! quop run -i adder.tfc --basis 5
//! quop truth-table -i adder.tfc --format json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{run, truth_table, version};

/// quop - dense unitary simulator for small quantum and reversible circuits
#[derive(Parser)]
#[command(name = "quop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a netlist, feed it a basis input and print the output state
    Run {
        /// Input netlist (.tfc)
        #[arg(short, long)]
        input: String,

        /// Basis input index (wire 0 is the least significant bit)
        #[arg(short, long, default_value = "0")]
        basis: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the truth table of a reversible netlist
    TruthTable {
        /// Input netlist (.tfc)
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

/// Report format shared by the reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            input,
            basis,
            format,
        } => run::execute(&input, basis, format),

        Commands::TruthTable { input, format } => truth_table::execute(&input, format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
