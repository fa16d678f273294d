mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use salesest_core::ReportFormat;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "salesest")]
#[command(about = "Expected-sales statement calculator for franchise store applicants")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a (min, max) monthly sales range against the legal 1.7x ceiling
    Ratio {
        /// Minimum monthly sales (만원)
        #[arg(long)]
        min: Decimal,
        /// Maximum monthly sales (만원)
        #[arg(long)]
        max: Decimal,
    },
    /// Validate a franchisor-predicted range (method B)
    Predict {
        /// Predicted minimum monthly sales (만원)
        #[arg(long)]
        min: Decimal,
        /// Predicted maximum monthly sales (만원)
        #[arg(long)]
        max: Decimal,
        /// Rationale for the prediction
        #[arg(long, default_value = "")]
        basis: String,
    },
    /// Run the calculation described by a request file
    Estimate {
        /// Path to the request YAML
        #[arg(long)]
        input: PathBuf,
    },
    /// Generate the expected-sales statement for a request file
    Report {
        /// Path to the request YAML
        #[arg(long)]
        input: PathBuf,
        /// Output format (markdown or json); defaults to SALESEST_REPORT_FORMAT
        #[arg(long)]
        format: Option<ReportFormat>,
        /// Output file; defaults to a generated name under SALESEST_OUTPUT_DIR
        #[arg(long)]
        output: Option<PathBuf>,
        /// Produce the statement without running the calculation
        #[arg(long)]
        skip_calculation: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let config = salesest_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Ratio { min, max }) => commands::run_ratio(min, max),
        Some(Commands::Predict { min, max, basis }) => commands::run_predict(min, max, &basis)?,
        Some(Commands::Estimate { input }) => commands::run_estimate(&input)?,
        Some(Commands::Report {
            input,
            format,
            output,
            skip_calculation,
        }) => {
            let format = format.unwrap_or(config.report_format);
            commands::run_report(&config, &input, format, output, skip_calculation)?;
        }
        None => println!("no command given; run `salesest --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
