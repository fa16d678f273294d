//! Merge of form metadata and an estimation result into one report record.
//!
//! Nothing is computed here. The only logic is the completeness gate that
//! must pass before any report is produced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ReportDataError;
use crate::estimate::EstimationResult;

/// A competing business near the planned store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub name: String,
    #[serde(default)]
    pub distance_m: Decimal,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub notes: String,
}

/// Everything on the statutory form besides the sales figures.
///
/// Money is in 만원, areas in ㎡.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub author_name: String,

    #[serde(default)]
    pub franchise_brand: String,
    #[serde(default)]
    pub franchise_ceo: String,
    #[serde(default)]
    pub franchise_address: String,

    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub store_address: String,
    #[serde(default)]
    pub store_area_sqm: Decimal,

    #[serde(default)]
    pub deposit: Decimal,
    #[serde(default)]
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub previous_business: String,
    /// Free-text description of offices, housing, schools etc. nearby.
    #[serde(default)]
    pub major_facilities: String,
    #[serde(default)]
    pub competitors: Vec<CompetitorRecord>,
}

/// Fields that must be filled in before a report may be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    FranchiseBrand,
    FranchiseCeo,
    ApplicantName,
    StoreAddress,
    StoreArea,
}

impl RequiredField {
    /// Form label for the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::FranchiseBrand => "브랜드명",
            RequiredField::FranchiseCeo => "대표자명",
            RequiredField::ApplicantName => "가맹희망자 성명",
            RequiredField::StoreAddress => "점포 예정지 주소",
            RequiredField::StoreArea => "점포 면적",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredField::FranchiseBrand => write!(f, "franchise brand"),
            RequiredField::FranchiseCeo => write!(f, "franchise CEO"),
            RequiredField::ApplicantName => write!(f, "applicant name"),
            RequiredField::StoreAddress => write!(f, "store address"),
            RequiredField::StoreArea => write!(f, "store area"),
        }
    }
}

impl ReportMetadata {
    /// Required fields that are blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let blank = |s: &str| s.trim().is_empty();
        let mut missing = Vec::new();

        if blank(&self.franchise_brand) {
            missing.push(RequiredField::FranchiseBrand);
        }
        if blank(&self.franchise_ceo) {
            missing.push(RequiredField::FranchiseCeo);
        }
        if blank(&self.applicant_name) {
            missing.push(RequiredField::ApplicantName);
        }
        if blank(&self.store_address) {
            missing.push(RequiredField::StoreAddress);
        }
        if self.store_area_sqm <= Decimal::ZERO {
            missing.push(RequiredField::StoreArea);
        }
        missing
    }
}

/// Flat record handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub metadata: ReportMetadata,
    /// Absent when the report is produced before any calculation ran.
    pub result: Option<EstimationResult>,
}

/// Merge metadata with an optional estimation result.
///
/// # Errors
///
/// Returns [`ReportDataError::MissingFields`] listing every required field
/// that is blank (or, for the store area, not positive).
pub fn assemble_report_data(
    metadata: ReportMetadata,
    result: Option<EstimationResult>,
) -> Result<ReportData, ReportDataError> {
    let fields = metadata.missing_fields();
    if !fields.is_empty() {
        return Err(ReportDataError::MissingFields { fields });
    }

    Ok(ReportData { metadata, result })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::prediction::validate_predicted_range;

    fn complete_metadata() -> ReportMetadata {
        ReportMetadata {
            creation_date: NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"),
            author_name: "김담당".to_string(),
            franchise_brand: "한입치킨".to_string(),
            franchise_ceo: "이대표".to_string(),
            franchise_address: "서울특별시 중구 세종대로 1".to_string(),
            applicant_name: "박희망".to_string(),
            store_address: "경기도 성남시 분당구 정자동 10".to_string(),
            store_area_sqm: dec!(33.0),
            deposit: dec!(3000),
            monthly_rent: dec!(150),
            previous_business: "분식점".to_string(),
            major_facilities: "오피스, 아파트 단지".to_string(),
            competitors: vec![],
        }
    }

    #[test]
    fn complete_metadata_has_no_missing_fields() {
        assert!(complete_metadata().missing_fields().is_empty());
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let mut metadata = complete_metadata();
        metadata.store_address = "   ".to_string();
        metadata.franchise_brand = String::new();
        metadata.store_area_sqm = Decimal::ZERO;

        let err = assemble_report_data(metadata, None).unwrap_err();
        assert_eq!(
            err,
            ReportDataError::MissingFields {
                fields: vec![
                    RequiredField::FranchiseBrand,
                    RequiredField::StoreAddress,
                    RequiredField::StoreArea,
                ]
            }
        );
        assert!(err.to_string().contains("franchise brand, store address, store area"));
    }

    #[test]
    fn negative_store_area_is_missing() {
        let mut metadata = complete_metadata();
        metadata.store_area_sqm = dec!(-3);
        assert_eq!(metadata.missing_fields(), vec![RequiredField::StoreArea]);
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let mut metadata = complete_metadata();
        metadata.author_name = String::new();
        metadata.franchise_address = String::new();
        metadata.major_facilities = String::new();
        assert!(assemble_report_data(metadata, None).is_ok());
    }

    #[test]
    fn assembled_record_carries_result_unchanged() {
        let result = validate_predicted_range(dec!(3000), dec!(4000), "평균 매출").unwrap();
        let data = assemble_report_data(complete_metadata(), Some(result.clone())).unwrap();
        assert_eq!(data.result, Some(result));
        assert_eq!(data.metadata, complete_metadata());
    }

    #[test]
    fn required_field_labels() {
        assert_eq!(RequiredField::FranchiseBrand.label(), "브랜드명");
        assert_eq!(RequiredField::StoreArea.label(), "점포 면적");
    }
}
