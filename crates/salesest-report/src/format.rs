use rust_decimal::{Decimal, RoundingStrategy};
use salesest_core::{ReportFormat, ReportMetadata};

/// Whole 만원 with thousands separators, e.g. `3299.9999` → `"3,300"`.
#[must_use]
pub fn format_manwon(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Ratio to two decimals, e.g. `1.181818` → `"1.18"`.
#[must_use]
pub fn format_ratio(ratio: Decimal) -> String {
    format!("{ratio:.2}")
}

/// Decimal without trailing zeros, e.g. `33.50` → `"33.5"`.
pub(crate) fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Default file name for a report:
/// `예상매출액산정서_{applicant}_{YYYY-MM-DD}.{ext}`.
///
/// Path separators and whitespace in the applicant name become `_`.
#[must_use]
pub fn report_file_name(metadata: &ReportMetadata, format: ReportFormat) -> String {
    let applicant: String = metadata
        .applicant_name
        .trim()
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect();

    format!(
        "예상매출액산정서_{applicant}_{}.{}",
        metadata.creation_date.format("%Y-%m-%d"),
        format.extension()
    )
}
