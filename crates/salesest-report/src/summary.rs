use std::fmt::Write as _;

use salesest_core::EstimationResult;

use crate::format::{format_manwon, format_ratio};

/// Short plain-text summary of a result for terminal output.
#[must_use]
pub fn render_summary(result: &EstimationResult) -> String {
    let mut out = String::new();
    let method = result.method();
    let ratio = result
        .ratio()
        .map_or_else(|| "n/a".to_string(), |r| format!("{}x", format_ratio(r)));
    let verdict = if result.is_compliant() {
        "compliant"
    } else {
        "NOT compliant"
    };

    let _ = writeln!(out, "{:<14}{method} ({})", "method", method.label());
    let _ = writeln!(
        out,
        "{:<14}{}만원/월",
        "min sales",
        format_manwon(result.min_monthly_sales())
    );
    let _ = writeln!(
        out,
        "{:<14}{}만원/월",
        "max sales",
        format_manwon(result.max_monthly_sales())
    );
    let _ = writeln!(out, "{:<14}{ratio}", "max/min");
    let _ = writeln!(
        out,
        "{:<14}{verdict}: {}",
        "legal ratio",
        result.compliance_message()
    );
    if let Some(basis) = result.basis().filter(|b| !b.trim().is_empty()) {
        let _ = writeln!(out, "{:<14}{}", "basis", basis.trim());
    }
    out
}
