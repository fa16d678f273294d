use rust_decimal_macros::dec;
use salesest_core::{AppConfig, Environment};

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["salesest"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_ratio_command() {
    let cli = Cli::try_parse_from(["salesest", "ratio", "--min", "100", "--max", "170.01"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Ratio { min, max }) if min == dec!(100) && max == dec!(170.01)
    ));
}

#[test]
fn ratio_requires_both_bounds() {
    assert!(Cli::try_parse_from(["salesest", "ratio", "--min", "100"]).is_err());
}

#[test]
fn ratio_rejects_non_numeric_bound() {
    assert!(Cli::try_parse_from(["salesest", "ratio", "--min", "abc", "--max", "1"]).is_err());
}

#[test]
fn parses_predict_with_default_basis() {
    let cli = Cli::try_parse_from(["salesest", "predict", "--min", "300", "--max", "600"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Predict { ref basis, .. }) if basis.is_empty()
    ));
}

#[test]
fn parses_predict_with_basis() {
    let cli = Cli::try_parse_from([
        "salesest",
        "predict",
        "--min",
        "300",
        "--max",
        "450",
        "--basis",
        "유사 가맹점 평균",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Predict { min, ref basis, .. }) if min == dec!(300) && basis == "유사 가맹점 평균"
    ));
}

#[test]
fn parses_estimate_command() {
    let cli = Cli::try_parse_from(["salesest", "estimate", "--input", "req.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Estimate { ref input }) if input == &PathBuf::from("req.yaml")
    ));
}

#[test]
fn parses_report_defaults() {
    let cli = Cli::try_parse_from(["salesest", "report", "--input", "req.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            format: None,
            output: None,
            skip_calculation: false,
            ..
        })
    ));
}

#[test]
fn parses_report_with_format_and_output() {
    let cli = Cli::try_parse_from([
        "salesest",
        "report",
        "--input",
        "req.yaml",
        "--format",
        "json",
        "--output",
        "out/report.json",
        "--skip-calculation",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            format: Some(ReportFormat::Json),
            output: Some(ref o),
            skip_calculation: true,
            ..
        }) if o == &PathBuf::from("out/report.json")
    ));
}

#[test]
fn report_rejects_unknown_format() {
    assert!(Cli::try_parse_from([
        "salesest", "report", "--input", "req.yaml", "--format", "pdf"
    ])
    .is_err());
}

const REQUEST_YAML: &str = r"
metadata:
  creation_date: 2024-03-15
  franchise_brand: 한입치킨
  franchise_ceo: 이대표
  applicant_name: 박희망
  store_address: 경기도 성남시 분당구 정자동 10
  store_area_sqm: 30
method: comparable-stores
nearby_stores:
  - { name: 점포1, monthly_sales: 3000, area_sqm: 30 }
  - { name: 점포2, monthly_sales: 3300, area_sqm: 30 }
  - { name: 점포3, monthly_sales: 3600, area_sqm: 30 }
  - { name: 점포4, monthly_sales: 3900, area_sqm: 30 }
  - { name: 점포5, monthly_sales: 4200, area_sqm: 30 }
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("salesest-cli-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn test_config(output_dir: PathBuf) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        output_dir,
        report_format: ReportFormat::Markdown,
    }
}

#[test]
fn run_report_writes_markdown_under_output_dir() {
    let dir = scratch_dir("report");
    let input = dir.join("request.yaml");
    std::fs::write(&input, REQUEST_YAML).expect("write request");
    let out_dir = dir.join("reports");

    commands::run_report(
        &test_config(out_dir.clone()),
        &input,
        ReportFormat::Markdown,
        None,
        false,
    )
    .expect("report should be written");

    let written = out_dir.join("예상매출액산정서_박희망_2024-03-15.md");
    let body = std::fs::read_to_string(&written).expect("read report");
    assert!(body.contains("- **최저 예상매출액**: 3,300만원/월"));
    assert!(body.contains("✅ 준수"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_report_fails_on_missing_metadata() {
    let dir = scratch_dir("missing");
    let input = dir.join("request.yaml");
    std::fs::write(&input, REQUEST_YAML.replace("applicant_name: 박희망", ""))
        .expect("write request");

    let err = commands::run_report(
        &test_config(dir.join("reports")),
        &input,
        ReportFormat::Json,
        Some(dir.join("out.json")),
        true,
    )
    .unwrap_err();
    assert!(err.to_string().contains("applicant name"), "{err}");
    assert!(!dir.join("out.json").exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_estimate_rejects_insufficient_comparables() {
    let dir = scratch_dir("estimate");
    let input = dir.join("request.yaml");
    let thin: String = REQUEST_YAML
        .lines()
        .filter(|l| !l.contains("점포3") && !l.contains("점포4") && !l.contains("점포5"))
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&input, thin).expect("write request");

    let err = commands::run_estimate(&input).unwrap_err();
    assert!(err.to_string().contains("at least 3"), "{err}");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_ratio_handles_unrepresentable_spread() {
    commands::run_ratio(dec!(0.0000000000000000000000000001), dec!(1000));
}
