mod repl;

use clap::{Parser, Subcommand};
use lc_app::{AppResult, LengthUnit};
use lc_core::{convert_units, metres_per_unit};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lc-cli")]
#[command(about = "Length Unit Converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported units, their factors, and their length in metres
    Units,
    /// Convert a single value
    Convert {
        /// Value to convert (anything that is not a number is reported as invalid)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Unit the value is expressed in (label or symbol)
        #[arg(long, default_value = "Metre")]
        from: LengthUnit,
        /// Unit to convert to (label or symbol)
        #[arg(long, default_value = "Metre")]
        to: LengthUnit,
    },
    /// Interactive form on stdin
    Form,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Units => cmd_units(),
        Commands::Convert { value, from, to } => cmd_convert(&value, from, to),
        Commands::Form => repl::run(io::stdin().lock(), &mut io::stdout().lock()),
    }
}

fn cmd_units() -> AppResult<()> {
    println!(
        "{:<12} {:<6} {:>12} {:>14}",
        "Unit", "Symbol", "Factor", "Metres"
    );
    for unit in LengthUnit::ALL {
        println!(
            "{:<12} {:<6} {:>12} {:>14.6}",
            unit.label(),
            unit.symbol(),
            unit.factor(),
            metres_per_unit(unit)
        );
    }
    Ok(())
}

fn cmd_convert(value: &str, from: LengthUnit, to: LengthUnit) -> AppResult<()> {
    let result = convert_units(value, from, to);
    tracing::debug!(%from, %to, valid = result.is_valid(), "single conversion");
    println!("Result: {}", result);
    Ok(())
}
