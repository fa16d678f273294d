//! Markdown rendering of the 예상매출액 산정서 (expected-sales statement).

use std::fmt::Write as _;

use salesest_core::{
    CompetitorRecord, EstimationMethod, EstimationResult, ReportData, ReportMetadata,
    LEGAL_RATIO_CEILING,
};

use crate::format::{format_manwon, format_plain, format_ratio};

/// Render the full statement as Markdown.
#[must_use]
pub fn render_markdown(data: &ReportData) -> String {
    let meta = &data.metadata;
    let mut out = String::new();

    out.push_str("# 예상매출액 산정서\n\n");

    out.push_str("## 기본 정보\n");
    line(&mut out, "작성일자", &meta.creation_date.format("%Y-%m-%d").to_string());
    line(&mut out, "작성자", &meta.author_name);
    out.push('\n');

    out.push_str("## 가맹본부 정보\n");
    line(&mut out, "영업표지", &meta.franchise_brand);
    line(&mut out, "대표자", &meta.franchise_ceo);
    line(&mut out, "주소", &meta.franchise_address);
    out.push('\n');

    out.push_str("## 가맹희망자 정보\n");
    line(&mut out, "성명", &meta.applicant_name);
    line(&mut out, "점포 예정지", &meta.store_address);
    line(
        &mut out,
        "예정 면적",
        &format!("{}㎡", format_plain(meta.store_area_sqm)),
    );
    out.push('\n');

    out.push_str("## 매출 산출 결과\n");
    match &data.result {
        Some(result) => push_result(&mut out, result),
        None => out.push_str("- 산출된 예상매출액이 없습니다.\n"),
    }
    out.push('\n');

    push_trade_area(&mut out, meta);

    out.push_str("---\n*본 산정서는 가맹사업법 시행령에 따라 작성되었습니다.*\n");
    out
}

fn line(out: &mut String, label: &str, value: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "- **{label}**: {value}");
}

fn push_result(out: &mut String, result: &EstimationResult) {
    let method = result.method();
    line(
        out,
        "산출 방식",
        &format!("{} ({})", method.label(), method.legal_basis()),
    );
    line(
        out,
        "최저 예상매출액",
        &format!("{}만원/월", format_manwon(result.min_monthly_sales())),
    );
    line(
        out,
        "최고 예상매출액",
        &format!("{}만원/월", format_manwon(result.max_monthly_sales())),
    );
    if let Some(ratio) = result.ratio() {
        line(out, "최고/최저 비율", &format!("{}배", format_ratio(ratio)));
    }

    let verdict = if result.is_compliant() {
        format!("✅ 준수 (최고/최저 {LEGAL_RATIO_CEILING}배 이하)")
    } else {
        format!("❌ 미준수 (최고/최저 {LEGAL_RATIO_CEILING}배 초과 또는 최저액 0 이하) - 범위 조정 필요")
    };
    line(out, "법적 기준 준수", &verdict);

    if method == EstimationMethod::FranchisorPrediction {
        if let Some(basis) = result.basis().filter(|b| !b.trim().is_empty()) {
            out.push_str("\n### 예측 근거\n");
            out.push_str(basis.trim_end());
            out.push('\n');
        }
    }
}

fn push_trade_area(out: &mut String, meta: &ReportMetadata) {
    out.push_str("## 상권 분석\n");
    out.push_str("### 점포 정보\n");
    line(out, "보증금", &format!("{}만원", format_manwon(meta.deposit)));
    line(out, "월세", &format!("{}만원", format_manwon(meta.monthly_rent)));
    line(out, "기존 업종", &meta.previous_business);
    out.push('\n');

    let competitors: Vec<&CompetitorRecord> = meta
        .competitors
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .collect();
    if !competitors.is_empty() {
        out.push_str("### 경쟁점 현황\n");
        out.push_str("| 업체명 | 거리(m) | 업종 | 비고 |\n");
        out.push_str("|--------|---------|------|------|\n");
        for c in competitors {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                cell(&c.name),
                format_plain(c.distance_m),
                cell(&c.business_type),
                cell(&c.notes)
            );
        }
        out.push('\n');
    }

    out.push_str("### 주변 환경\n");
    if meta.major_facilities.trim().is_empty() {
        out.push_str("-\n");
    } else {
        out.push_str(meta.major_facilities.trim_end());
        out.push('\n');
    }
    out.push('\n');
}

/// Table cells cannot contain pipes or newlines.
fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
