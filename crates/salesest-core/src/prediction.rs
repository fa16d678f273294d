use rust_decimal::Decimal;

use crate::error::EstimationError;
use crate::estimate::{EstimationMethod, EstimationResult};

/// Validate a franchisor-supplied monthly sales range.
///
/// The range is taken as-is and only checked against the legal ratio
/// ceiling; `basis` is carried into the result verbatim. An out-of-bounds
/// ratio is returned as a non-compliant result, not an error.
///
/// # Errors
///
/// Returns [`EstimationError::InvalidInput`] if either bound is not positive
/// or `max / min` overflows.
pub fn validate_predicted_range(
    min_sales: Decimal,
    max_sales: Decimal,
    basis: &str,
) -> Result<EstimationResult, EstimationError> {
    if min_sales <= Decimal::ZERO || max_sales <= Decimal::ZERO {
        return Err(EstimationError::InvalidInput(format!(
            "both minimum and maximum predicted sales must be positive (got min {min_sales}, max {max_sales})"
        )));
    }

    EstimationResult::stamped(
        min_sales,
        max_sales,
        EstimationMethod::FranchisorPrediction,
        Some(basis.to_string()),
    )
}
