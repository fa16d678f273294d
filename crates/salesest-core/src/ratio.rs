//! Statutory max/min spread check for an expected-sales range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Regulatory ceiling for `max / min` of an expected-sales range (1.7×).
///
/// Inclusive: a ratio of exactly 1.7 complies.
pub const LEGAL_RATIO_CEILING: Decimal = Decimal::from_parts(17, 0, 0, false, 1);

/// Outcome of [`check_legal_ratio`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioCheck {
    pub is_compliant: bool,
    /// `max / min`; `None` when the minimum is not positive or the quotient
    /// is out of `Decimal` range.
    pub ratio: Option<Decimal>,
    pub message: String,
}

/// Decide whether a (min, max) monthly sales range satisfies the legal ratio
/// ceiling.
#[must_use]
pub fn check_legal_ratio(min_sales: Decimal, max_sales: Decimal) -> RatioCheck {
    if min_sales <= Decimal::ZERO {
        return RatioCheck {
            is_compliant: false,
            ratio: None,
            message: "minimum sales must be positive (greater than zero)".to_string(),
        };
    }

    let Some(ratio) = max_sales.checked_div(min_sales) else {
        return RatioCheck {
            is_compliant: false,
            ratio: None,
            message: format!(
                "ratio of maximum {max_sales} to minimum {min_sales} is out of range"
            ),
        };
    };
    if ratio > LEGAL_RATIO_CEILING {
        RatioCheck {
            is_compliant: false,
            ratio: Some(ratio),
            message: format!(
                "exceeds the legal ceiling of {LEGAL_RATIO_CEILING}x; current ratio: {ratio:.2}x"
            ),
        }
    } else {
        RatioCheck {
            is_compliant: true,
            ratio: Some(ratio),
            message: format!(
                "within the legal ceiling of {LEGAL_RATIO_CEILING}x; current ratio: {ratio:.2}x"
            ),
        }
    }
}
