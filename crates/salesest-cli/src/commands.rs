//! Command handlers for the CLI.
//!
//! Engine errors are propagated to `main` unchanged; a non-compliant ratio is
//! printed as a normal outcome.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use salesest_core::{
    assemble_report_data, check_legal_ratio, load_request, trim_rates, validate_predicted_range,
    AppConfig, EstimationMethod, NearbyStoreRecord, ReportFormat,
};
use salesest_report::{format_manwon, render, render_summary, report_file_name};

/// Print the legal ratio verdict for a (min, max) pair.
pub(crate) fn run_ratio(min: Decimal, max: Decimal) {
    let check = check_legal_ratio(min, max);
    let mark = if check.is_compliant { "ok" } else { "FAIL" };
    println!("{mark}: {}", check.message);
}

/// Validate a franchisor prediction and print its summary.
///
/// # Errors
///
/// Returns an error if either bound is not positive.
pub(crate) fn run_predict(min: Decimal, max: Decimal, basis: &str) -> anyhow::Result<()> {
    let result = validate_predicted_range(min, max, basis)?;
    print!("{}", render_summary(&result));
    Ok(())
}

/// Run the method selected in a request file and print the outcome.
///
/// For the comparable method the per-store rates and the kept window are
/// printed before the summary.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the estimator rejects
/// the input.
pub(crate) fn run_estimate(input: &Path) -> anyhow::Result<()> {
    let request = load_request(input)?;

    if request.method == EstimationMethod::ComparableStores {
        print_rate_table(&request.nearby_stores);
    }

    let result = request.run()?;
    print!("{}", render_summary(&result));
    Ok(())
}

/// Assemble and write the expected-sales statement for a request file.
///
/// # Errors
///
/// Returns an error if the request cannot be loaded, the calculation fails,
/// required metadata is missing, or the file cannot be written.
pub(crate) fn run_report(
    config: &AppConfig,
    input: &Path,
    format: ReportFormat,
    output: Option<PathBuf>,
    skip_calculation: bool,
) -> anyhow::Result<()> {
    let request = load_request(input)?;

    let result = if skip_calculation {
        None
    } else {
        Some(request.run()?)
    };
    if let Some(result) = &result {
        print!("{}", render_summary(result));
    }

    let path = output
        .unwrap_or_else(|| config.output_dir.join(report_file_name(&request.metadata, format)));
    let data = assemble_report_data(request.metadata, result)?;
    let body = render(&data, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", parent.display()))?;
    }
    std::fs::write(&path, body)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;

    tracing::info!(path = %path.display(), %format, "report written");
    println!("report written to {}", path.display());
    Ok(())
}

/// Print one row per comparable store plus the rates the estimate uses.
fn print_rate_table(records: &[NearbyStoreRecord]) {
    println!(
        "{:<16}{:>12}{:>10}{:>6}  RATE (만원/일/㎡)",
        "STORE", "SALES", "AREA", "DAYS"
    );
    for record in records {
        let rate = record
            .normalized_rate()
            .map_or_else(|| "skipped".to_string(), |r| format!("{r:.3}"));
        println!(
            "{:<16}{:>12}{:>10}{:>6}  {rate}",
            record.name,
            format_manwon(record.monthly_sales),
            record.area_sqm.normalize(),
            record.operating_days
        );
    }

    let mut rates: Vec<Decimal> = records
        .iter()
        .filter_map(NearbyStoreRecord::normalized_rate)
        .collect();
    rates.sort_unstable();
    let kept: Vec<String> = trim_rates(&rates)
        .iter()
        .map(|r| format!("{r:.3}"))
        .collect();
    println!("kept rates: [{}]", kept.join(", "));
    println!();
}
