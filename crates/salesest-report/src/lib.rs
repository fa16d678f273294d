//! Renderers for expected-sales reports.
//!
//! Every renderer is a pure consumer of a [`salesest_core::ReportData`] or
//! [`salesest_core::EstimationResult`]: figures are printed as computed by
//! the engine, never recomputed.

pub mod format;
pub mod markdown;
pub mod summary;

use salesest_core::{ReportData, ReportFormat};

pub use format::{format_manwon, format_ratio, report_file_name};
pub use markdown::render_markdown;
pub use summary::render_summary;

/// Serialize the full report record as pretty-printed JSON.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn render_json(data: &ReportData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Render a report in the requested format.
///
/// # Errors
///
/// Only [`ReportFormat::Json`] can fail; see [`render_json`].
pub fn render(data: &ReportData, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(data)),
        ReportFormat::Json => render_json(data),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use salesest_core::{assemble_report_data, validate_predicted_range, ReportMetadata};

    use super::*;

    fn data() -> ReportData {
        let metadata = ReportMetadata {
            creation_date: NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"),
            author_name: String::new(),
            franchise_brand: "한입치킨".to_string(),
            franchise_ceo: "이대표".to_string(),
            franchise_address: String::new(),
            applicant_name: "박희망".to_string(),
            store_address: "경기도 성남시".to_string(),
            store_area_sqm: dec!(30),
            deposit: Decimal::ZERO,
            monthly_rent: Decimal::ZERO,
            previous_business: String::new(),
            major_facilities: String::new(),
            competitors: vec![],
        };
        let result = validate_predicted_range(dec!(300), dec!(600), "x").unwrap();
        assemble_report_data(metadata, Some(result)).unwrap()
    }

    #[test]
    fn json_carries_result_fields() {
        let json = render_json(&data()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["method"], "franchisor-prediction");
        assert_eq!(value["result"]["is_compliant"], false);
        assert_eq!(value["result"]["min_monthly_sales"], "300");
        assert_eq!(value["metadata"]["applicant_name"], "박희망");
    }

    #[test]
    fn render_dispatches_on_format() {
        let data = data();
        assert_eq!(
            render(&data, ReportFormat::Markdown).unwrap(),
            render_markdown(&data)
        );
        assert_eq!(render(&data, ReportFormat::Json).unwrap(), render_json(&data).unwrap());
    }
}
