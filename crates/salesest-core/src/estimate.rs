use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::ratio::{check_legal_ratio, RatioCheck};

/// How an expected-sales range was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimationMethod {
    /// Projection from the sales of nearby franchise outlets.
    ComparableStores,
    /// Range supplied directly by the franchisor.
    FranchisorPrediction,
}

impl EstimationMethod {
    /// Label used on the statutory form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EstimationMethod::ComparableStores => "A형: 인근 가맹점 매출 활용",
            EstimationMethod::FranchisorPrediction => "B형: 가맹본부 예측 방식",
        }
    }

    /// Clause of the Franchise Business Act enforcement decree the method
    /// follows.
    #[must_use]
    pub fn legal_basis(self) -> &'static str {
        match self {
            EstimationMethod::ComparableStores => "시행령 제9조 제4항",
            EstimationMethod::FranchisorPrediction => "시행령 제9조 제3항",
        }
    }
}

impl std::fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimationMethod::ComparableStores => write!(f, "comparable-stores"),
            EstimationMethod::FranchisorPrediction => write!(f, "franchisor-prediction"),
        }
    }
}

impl std::str::FromStr for EstimationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comparable-stores" | "a" | "A" => Ok(EstimationMethod::ComparableStores),
            "franchisor-prediction" | "b" | "B" => Ok(EstimationMethod::FranchisorPrediction),
            other => Err(format!(
                "unknown estimation method '{other}'; expected comparable-stores or franchisor-prediction"
            )),
        }
    }
}

/// Monthly expected-sales range (in 만원) with its compliance verdict.
///
/// Fields are private so a produced result cannot be edited after the
/// compliance stamp was computed; a new calculation yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimationResult {
    min_monthly_sales: Decimal,
    max_monthly_sales: Decimal,
    method: EstimationMethod,
    is_compliant: bool,
    compliance_message: String,
    ratio: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basis: Option<String>,
}

impl EstimationResult {
    /// Stamp a (min, max) range with the legal ratio check.
    ///
    /// Callers only stamp ranges with a positive minimum, so a missing ratio
    /// means `max / min` left the `Decimal` range.
    pub(crate) fn stamped(
        min_monthly_sales: Decimal,
        max_monthly_sales: Decimal,
        method: EstimationMethod,
        basis: Option<String>,
    ) -> Result<Self, EstimationError> {
        let RatioCheck {
            is_compliant,
            ratio,
            message,
        } = check_legal_ratio(min_monthly_sales, max_monthly_sales);
        if ratio.is_none() {
            return Err(EstimationError::InvalidInput(message));
        }

        tracing::info!(
            %method,
            min = %min_monthly_sales,
            max = %max_monthly_sales,
            compliant = is_compliant,
            "expected sales range computed"
        );

        Ok(Self {
            min_monthly_sales,
            max_monthly_sales,
            method,
            is_compliant,
            compliance_message: message,
            ratio,
            basis,
        })
    }

    #[must_use]
    pub fn min_monthly_sales(&self) -> Decimal {
        self.min_monthly_sales
    }

    #[must_use]
    pub fn max_monthly_sales(&self) -> Decimal {
        self.max_monthly_sales
    }

    #[must_use]
    pub fn method(&self) -> EstimationMethod {
        self.method
    }

    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.is_compliant
    }

    #[must_use]
    pub fn compliance_message(&self) -> &str {
        &self.compliance_message
    }

    /// `max / min`, absent when the minimum was not positive.
    #[must_use]
    pub fn ratio(&self) -> Option<Decimal> {
        self.ratio
    }

    /// Free-text rationale; only set for franchisor predictions.
    #[must_use]
    pub fn basis(&self) -> Option<&str> {
        self.basis.as_deref()
    }
}
